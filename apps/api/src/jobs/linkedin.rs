use crate::errors::AppError;
use crate::jobs::prompts::{LINKEDIN_PROMPT_TEMPLATE, LINKEDIN_SYSTEM};
use crate::llm_client::prompts::fill_template;
use crate::llm_client::{call_text, CompletionRequest, LlmClient};
use crate::models::job::JobPostingRecord;

/// Writes a LinkedIn announcement for a job posting.
pub async fn generate_linkedin_post(
    llm: &dyn LlmClient,
    job: &JobPostingRecord,
) -> Result<String, AppError> {
    let prompt = fill_template(
        LINKEDIN_PROMPT_TEMPLATE,
        &[
            ("title", job.title.as_str()),
            ("company", job.company.as_str()),
            ("location", job.location.as_str()),
            ("type", job.job_type.as_str()),
            ("description", job.description.as_str()),
            ("requirements", job.requirements.as_str()),
            ("salary", job.salary.as_str()),
        ],
    );

    call_text(
        llm,
        CompletionRequest::new(&prompt)
            .system(LINKEDIN_SYSTEM)
            .temperature(0.7)
            .max_tokens(400),
    )
    .await
}
