//! Job description generation: free-text ad → structured `JobPostingRecord`.

use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::jobs::prompts::{COMPANY_BACKGROUND_TEMPLATE, JOB_DESCRIPTION_SYSTEM};
use crate::llm_client::prompts::fill_template;
use crate::llm_client::{call_json, CompletionRequest, LlmClient};
use crate::models::job::JobPostingRecord;
use crate::normalize::CompanyNameExtractor;
use crate::research::CompanyResearcher;

#[derive(Debug, Deserialize)]
pub struct JobDescriptionRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub company: Option<String>,
}

/// Explicit company from the request, else the extractor's best guess, else empty.
pub fn resolve_company(request: &JobDescriptionRequest, extractor: &dyn CompanyNameExtractor) -> String {
    request
        .company
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(String::from)
        .or_else(|| extractor.extract(&request.prompt))
        .unwrap_or_default()
}

pub async fn generate_job_description(
    llm: &dyn LlmClient,
    extractor: &dyn CompanyNameExtractor,
    researcher: &CompanyResearcher,
    request: &JobDescriptionRequest,
) -> Result<JobPostingRecord, AppError> {
    if request.prompt.trim().is_empty() {
        return Err(AppError::missing("prompt"));
    }

    let company = resolve_company(request, extractor);
    info!("Job description company name: '{company}'");

    let background = researcher.search(&company).await;
    let mut prompt = request.prompt.clone();
    if !background.is_empty() {
        prompt.push_str(
            &fill_template(
                COMPANY_BACKGROUND_TEMPLATE,
                &[("company", company.as_str()), ("background", background.as_str())],
            ),
        );
    }

    let job_data = call_json(
        llm,
        CompletionRequest::new(&prompt)
            .system(JOB_DESCRIPTION_SYSTEM)
            .temperature(0.7)
            .max_tokens(1200),
    )
    .await?;

    if !job_data.is_object() {
        return Err(AppError::InvalidLlmOutput(
            "job description is not a JSON object".to_string(),
        ));
    }

    let mut job = JobPostingRecord::from_loose(&job_data);
    if job.company.trim().is_empty() {
        job.company = company;
    }
    info!("Generated job description '{}' for '{}'", job.title, job.company);
    Ok(job)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::stub::StubLlm;
    use crate::normalize::AtPhraseExtractor;

    fn request(prompt: &str, company: Option<&str>) -> JobDescriptionRequest {
        JobDescriptionRequest {
            prompt: prompt.to_string(),
            company: company.map(String::from),
        }
    }

    #[test]
    fn test_explicit_company_wins_over_heuristic() {
        let req = request("Backend role at Acme Corp", Some(" Globex "));
        assert_eq!(resolve_company(&req, &AtPhraseExtractor), "Globex");
    }

    #[test]
    fn test_blank_company_falls_back_to_heuristic() {
        let req = request("Backend role at Acme Corp", Some(""));
        assert_eq!(resolve_company(&req, &AtPhraseExtractor), "Acme Corp");
        let req = request("Backend role, remote", None);
        assert_eq!(resolve_company(&req, &AtPhraseExtractor), "");
    }

    #[tokio::test]
    async fn test_nested_description_is_flattened_and_company_filled() {
        let llm = StubLlm::replying(
            r#"```json
            {
                "title": "Platform Engineer",
                "company": "",
                "location": "Berlin",
                "type": "Full-time",
                "description": {"About the job": "Run the platform.", "Your Responsibilities": ["Keep it up"]},
                "requirements": ["Kubernetes", "Go"]
            }
            ```"#,
        );
        let researcher = CompanyResearcher::new(None).unwrap();

        let job = generate_job_description(
            &llm,
            &AtPhraseExtractor,
            &researcher,
            &request("Platform engineer at Initech in Berlin", None),
        )
        .await
        .unwrap();

        assert_eq!(job.company, "Initech");
        assert_eq!(
            job.description,
            "About the job:\nRun the platform.\n\nYour Responsibilities:\n- Keep it up\n"
        );
        assert_eq!(job.requirements, "Kubernetes; Go");
        assert_eq!(job.salary, "Not specified");
    }

    #[tokio::test]
    async fn test_missing_prompt_is_rejected_without_llm_call() {
        let llm = StubLlm::replying("{}");
        let researcher = CompanyResearcher::new(None).unwrap();
        let err = generate_job_description(&llm, &AtPhraseExtractor, &researcher, &request(" ", None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::MissingRequiredField(_)));
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_non_json_reply_is_invalid_output() {
        let llm = StubLlm::replying("Here is your job description: great job!");
        let researcher = CompanyResearcher::new(None).unwrap();
        let err = generate_job_description(&llm, &AtPhraseExtractor, &researcher, &request("Chef", None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidLlmOutput(_)));
    }
}
