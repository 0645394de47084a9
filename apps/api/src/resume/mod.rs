// Candidate intake: resume upload + extraction, profile summaries, manual saves.
// All LLM calls go through llm_client, all writes through the CandidateStore.

pub mod handlers;
pub mod ingest;
pub mod prompts;
pub mod summary;
