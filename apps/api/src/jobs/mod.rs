// Job postings: structured job descriptions from a free-text ad, and social posts for them.

pub mod description;
pub mod handlers;
pub mod linkedin;
pub mod prompts;
