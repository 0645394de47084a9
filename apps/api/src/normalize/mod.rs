//! Normalization core: total conversions from untrusted LLM output into canonical shapes.
//!
//! Nothing in here performs I/O. Every function except `unwrap_json` is infallible;
//! malformed input degrades to an empty default instead of an error.

pub mod coerce;
pub mod company;
pub mod description;
pub mod llm_json;

pub use coerce::{coerce_list, coerce_string};
pub use company::{AtPhraseExtractor, CompanyNameExtractor};
pub use description::flatten_description;
pub use llm_json::unwrap_json;
