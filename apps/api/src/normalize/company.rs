//! Best-effort company-name extraction from free-text job ads.

use once_cell::sync::Lazy;
use regex::Regex;

/// A strategy for guessing the hiring company from a job-ad prompt.
/// Carried in `AppState` as `Arc<dyn CompanyNameExtractor>`.
pub trait CompanyNameExtractor: Send + Sync {
    /// Returns `None` when no company can be located. Never fails.
    fn extract(&self, text: &str) -> Option<String>;
}

// "at <Name>": capitalised words, digits and ampersands following a standalone "at".
static RE_AT_COMPANY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bat\s+([A-Z0-9][A-Za-z0-9&]*(?:[ ]+&?[ ]*[A-Z0-9][A-Za-z0-9&]*)*)").unwrap()
});

/// Default extractor: first "at <Company Name>" phrase in the text.
pub struct AtPhraseExtractor;

impl CompanyNameExtractor for AtPhraseExtractor {
    fn extract(&self, text: &str) -> Option<String> {
        RE_AT_COMPANY
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|name| !name.is_empty())
    }
}
