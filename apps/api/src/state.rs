use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::normalize::CompanyNameExtractor;
use crate::research::CompanyResearcher;
use crate::store::CandidateStore;

/// Shared application state injected into all route handlers via Axum extractors.
/// Every external collaborator is constructed in `main` and can be swapped for a fake.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn LlmClient>,
    pub store: Arc<dyn CandidateStore>,
    /// Pluggable company-name heuristic. Default: AtPhraseExtractor.
    pub company_extractor: Arc<dyn CompanyNameExtractor>,
    pub researcher: CompanyResearcher,
    pub config: Config,
}
