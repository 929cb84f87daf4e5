//! Feed record fixtures.

use jobfinder_core::Job;
use serde_json::{json, Value};

/// One plausible raw feed record.
pub fn raw_job(id: &str, title: &str, company: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("{} at {}", title, company),
        "mainCategory": "Engineering",
        "applicationLink": "https://example.com/apply",
        "pubDate": "2024-01-01",
        "expiryDate": "2024-02-01",
        "companyName": company,
        "companyLogo": "https://example.com/logo.png",
        "jobType": "Full-Time",
        "workModel": "Remote",
        "seniorityLevel": "Mid",
        "minSalary": 50000,
        "maxSalary": 90000,
        "locations": ["Remote"],
        "tags": ["rust"],
    })
}

/// A normalized job built from a [`raw_job`] record.
pub fn job(id: &str, title: &str) -> Job {
    Job::from_raw(&raw_job(id, title, "Acme"))
}
