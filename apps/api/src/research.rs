//! Optional company background lookup through the Serper web-search API.
//!
//! Without `SERPER_API_KEY` every lookup returns an empty string. Lookup failures are
//! logged and also degrade to an empty string; research never fails a request.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

const SERPER_SEARCH_URL: &str = "https://google.serper.dev/search";
const MAX_SNIPPETS: usize = 3;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    organic: Vec<OrganicResult>,
}

#[derive(Debug, Deserialize)]
struct OrganicResult {
    snippet: Option<String>,
}

#[derive(Clone)]
pub struct CompanyResearcher {
    client: Client,
    api_key: Option<String>,
}

impl CompanyResearcher {
    pub fn new(api_key: Option<String>) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().timeout(Duration::from_secs(10)).build()?,
            api_key,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    /// Returns up to three "about us" snippets joined by newlines.
    pub async fn search(&self, company_name: &str) -> String {
        let company_name = company_name.trim();
        let Some(api_key) = self.api_key.as_deref() else {
            info!("Skipping company research: no search API key configured");
            return String::new();
        };
        if company_name.is_empty() {
            return String::new();
        }

        info!("Researching company '{company_name}'");
        match self.fetch_snippets(api_key, company_name).await {
            Ok(snippets) => snippets,
            Err(e) => {
                warn!("Company research for '{company_name}' failed: {e}");
                String::new()
            }
        }
    }

    async fn fetch_snippets(&self, api_key: &str, company_name: &str) -> Result<String, reqwest::Error> {
        let response: SearchResponse = self
            .client
            .post(SERPER_SEARCH_URL)
            .header("X-API-KEY", api_key)
            .json(&json!({ "q": format!("{company_name} about us") }))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(top_snippets(response))
    }
}

fn top_snippets(response: SearchResponse) -> String {
    response
        .organic
        .into_iter()
        .filter_map(|r| r.snippet)
        .filter(|s| !s.trim().is_empty())
        .take(MAX_SNIPPETS)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_without_key() {
        let researcher = CompanyResearcher::new(None).unwrap();
        assert!(!researcher.is_enabled());
        assert_eq!(researcher.search("Acme").await, "");
    }

    #[test]
    fn test_top_snippets_takes_first_three() {
        let response: SearchResponse = serde_json::from_str(
            r#"{"organic": [
                {"title": "a", "snippet": "one"},
                {"title": "b"},
                {"snippet": "two"},
                {"snippet": "three"},
                {"snippet": "four"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(top_snippets(response), "one\ntwo\nthree");
    }

    #[test]
    fn test_missing_organic_is_empty() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(top_snippets(response), "");
    }
}
