use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::first_present;
use crate::normalize::coerce::coerce_lines;
use crate::normalize::{coerce_list, coerce_string};

/// One position in a candidate's employment history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobExperience {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub responsibilities: Vec<String>,
}

/// One entry in a candidate's education history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub start_date: String,
    pub end_date: String,
}

/// Canonical candidate profile, keyed by `user_id`.
///
/// Every field is always present with a type-correct value: strings default to `""`,
/// sequences to `[]`. Build it with `from_loose`, never from raw LLM output directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub user_id: String,
    pub first_name: String,
    pub email: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub job_experience: Vec<JobExperience>,
    pub education_history: Vec<Education>,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
}

impl CandidateRecord {
    /// Normalizes a loosely-shaped object (LLM resume extraction or a client payload)
    /// into a canonical record. Accepts both the extraction keys (`full_name`,
    /// `employment_details`, `technical_skills`, ...) and the stored column names.
    pub fn from_loose(user_id: String, value: &Value) -> Self {
        Self {
            user_id,
            first_name: coerce_string(first_present(value, &["full_name", "first_name", "name"])),
            email: coerce_string(first_present(value, &["email", "email_id"])),
            github_url: coerce_string(first_present(value, &["github", "github_url"])),
            linkedin_url: coerce_string(first_present(value, &["linkedin", "linkedin_url"])),
            job_experience: JobExperience::list_from(first_present(
                value,
                &["employment_details", "job_experience"],
            )),
            education_history: Education::list_from(first_present(
                value,
                &["education_history", "education"],
            )),
            skills: coerce_list(first_present(value, &["technical_skills", "skills"])),
            certifications: coerce_list(first_present(value, &["certifications"])),
        }
    }
}

impl JobExperience {
    fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            company: coerce_string(obj.get("company")),
            position: coerce_string(obj.get("position").or_else(|| obj.get("title"))),
            start_date: coerce_string(obj.get("start_date")),
            end_date: coerce_string(obj.get("end_date")),
            responsibilities: coerce_lines(obj.get("responsibilities")),
        }
    }

    pub fn list_from(value: Option<&Value>) -> Vec<Self> {
        structured_list(value, Self::from_object)
    }
}

impl Education {
    fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            degree: coerce_string(obj.get("degree")),
            institution: coerce_string(obj.get("institution").or_else(|| obj.get("school"))),
            start_date: coerce_string(obj.get("start_date")),
            end_date: coerce_string(obj.get("end_date")),
        }
    }

    pub fn list_from(value: Option<&Value>) -> Vec<Self> {
        structured_list(value, Self::from_object)
    }
}

/// Arrays keep only their object elements; a lone object becomes a one-element list;
/// stray strings and other scalars are discarded.
fn structured_list<T>(value: Option<&Value>, build: fn(&Map<String, Value>) -> T) -> Vec<T> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_object)
            .map(build)
            .collect(),
        Some(Value::Object(obj)) => vec![build(obj)],
        _ => Vec::new(),
    }
}

/// Raw `candidates` table row. Columns may be null or hold legacy shapes.
#[derive(Debug, Clone, FromRow)]
pub struct CandidateRow {
    pub id: Uuid,
    pub user_id: String,
    pub first_name: Option<String>,
    pub email: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub job_experience: Option<Value>,
    pub education_history: Option<Value>,
    pub skills: Option<Vec<String>>,
    pub certifications: Option<Vec<String>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A persisted candidate: the canonical record plus its storage identity.
#[derive(Debug, Clone, Serialize)]
pub struct StoredCandidate {
    pub id: Uuid,
    #[serde(flatten)]
    pub record: CandidateRecord,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<CandidateRow> for StoredCandidate {
    fn from(row: CandidateRow) -> Self {
        let record = CandidateRecord {
            user_id: row.user_id,
            first_name: row.first_name.unwrap_or_default(),
            email: row.email.unwrap_or_default(),
            github_url: row.github_url.unwrap_or_default(),
            linkedin_url: row.linkedin_url.unwrap_or_default(),
            job_experience: JobExperience::list_from(row.job_experience.as_ref()),
            education_history: Education::list_from(row.education_history.as_ref()),
            skills: coerce_list(row.skills.map(Value::from).as_ref()),
            certifications: coerce_list(row.certifications.map(Value::from).as_ref()),
        };
        Self {
            id: row.id,
            record,
            updated_at: row.updated_at,
        }
    }
}
