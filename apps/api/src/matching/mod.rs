// Candidate matching: per-candidate LLM scoring against a job, and free-text candidate search.

pub mod handlers;
pub mod prompts;
pub mod scoring;
pub mod search;
