//! Job model and normalization.
//!
//! The feed is weakly typed: records routinely omit fields or carry the
//! wrong type. `Job::from_raw` is total over arbitrary input, every field
//! falls back to a default instead of failing.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A normalized job posting.
///
/// Consumers may rely on every field being present: string fields default
/// to `""`, salaries to `0`, and list fields to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub description: String,
    pub main_category: String,
    pub application_link: String,
    pub pub_date: String,
    pub expiry_date: String,
    pub company_name: String,
    pub company_logo: String,
    pub job_type: String,
    pub work_model: String,
    pub seniority_level: String,
    pub min_salary: f64,
    pub max_salary: f64,
    pub locations: Vec<String>,
    pub tags: Vec<String>,
}

impl Job {
    /// Normalizes one raw feed record into a `Job`.
    ///
    /// Records without a usable `id` get a freshly minted one, so the same
    /// logical job may carry different ids across fetches.
    pub fn from_raw(raw: &Value) -> Self {
        Self {
            id: id_field(raw),
            title: string_field(raw, "title"),
            description: string_field(raw, "description"),
            main_category: string_field(raw, "mainCategory"),
            application_link: string_field(raw, "applicationLink"),
            pub_date: string_field(raw, "pubDate"),
            expiry_date: string_field(raw, "expiryDate"),
            company_name: string_field(raw, "companyName"),
            company_logo: string_field(raw, "companyLogo"),
            job_type: string_field(raw, "jobType"),
            work_model: string_field(raw, "workModel"),
            seniority_level: string_field(raw, "seniorityLevel"),
            min_salary: salary_field(raw, "minSalary"),
            max_salary: salary_field(raw, "maxSalary"),
            locations: string_list_field(raw, "locations"),
            tags: string_list_field(raw, "tags"),
        }
    }
}

/// A non-empty string is used verbatim, a non-zero number is stringified,
/// anything else mints a fresh id.
fn id_field(raw: &Value) -> String {
    match raw.get("id") {
        Some(Value::String(id)) if !id.is_empty() => id.clone(),
        Some(Value::Number(id)) if id.as_f64() != Some(0.0) => id.to_string(),
        _ => Uuid::new_v4().to_string(),
    }
}

fn string_field(raw: &Value, key: &str) -> String {
    raw.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn salary_field(raw: &Value, key: &str) -> f64 {
    match raw.get(key) {
        Some(Value::Number(amount)) => amount.as_f64().unwrap_or(0.0),
        // Feeds occasionally quote salaries as strings.
        Some(Value::String(amount)) => amount.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn string_list_field(raw: &Value, key: &str) -> Vec<String> {
    match raw.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(|item| item.to_string())
            .collect(),
        _ => Vec::new(),
    }
}
