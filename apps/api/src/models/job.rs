use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::first_present;
use crate::normalize::{coerce_list, coerce_string, flatten_description};

const SALARY_NOT_SPECIFIED: &str = "Not specified";

/// A job posting as shown to recruiters. Produced per request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPostingRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    /// Always flat display text, even when the LLM nested it by section.
    pub description: String,
    /// Semicolon-separated requirements.
    pub requirements: String,
    pub salary: String,
}

impl JobPostingRecord {
    /// Normalizes LLM output or a client-supplied `jobData` object.
    pub fn from_loose(value: &Value) -> Self {
        let salary = coerce_string(value.get("salary"));
        Self {
            title: coerce_string(value.get("title")),
            company: coerce_string(value.get("company")),
            location: coerce_string(value.get("location")),
            job_type: coerce_string(first_present(value, &["type", "job_type"])),
            description: value
                .get("description")
                .map(flatten_description)
                .unwrap_or_default(),
            requirements: join_requirements(value.get("requirements")),
            salary: if salary.trim().is_empty() {
                SALARY_NOT_SPECIFIED.to_string()
            } else {
                salary
            },
        }
    }
}

fn join_requirements(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(_)) => coerce_list(value)
            .iter()
            .map(|r| r.trim())
            .filter(|r| !r.is_empty())
            .collect::<Vec<_>>()
            .join("; "),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_nested_description_is_flattened() {
        let job = JobPostingRecord::from_loose(&json!({
            "title": "Backend Engineer",
            "company": "Acme",
            "location": "Remote",
            "type": "Full-time",
            "description": {
                "About the job": "Build things.",
                "Your Responsibilities": ["Ship", "Review"]
            },
            "requirements": "Rust; SQL",
            "salary": "$150k"
        }));
        assert_eq!(
            job.description,
            "About the job:\nBuild things.\n\nYour Responsibilities:\n- Ship\n- Review\n"
        );
        assert_eq!(job.requirements, "Rust; SQL");
        assert_eq!(job.salary, "$150k");
        assert_eq!(job.job_type, "Full-time");
    }

    #[test]
    fn test_requirements_array_is_semicolon_joined() {
        let job = JobPostingRecord::from_loose(&json!({"requirements": ["Rust", " ", "Tokio"]}));
        assert_eq!(job.requirements, "Rust; Tokio");
    }

    #[test]
    fn test_salary_defaults_to_not_specified() {
        assert_eq!(JobPostingRecord::from_loose(&json!({})).salary, "Not specified");
        assert_eq!(
            JobPostingRecord::from_loose(&json!({"salary": ""})).salary,
            "Not specified"
        );
    }

    #[test]
    fn test_serializes_type_field_name() {
        let job = JobPostingRecord::from_loose(&json!({"type": "Contract"}));
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["type"], "Contract");
        assert!(value.get("job_type").is_none());
    }
}
