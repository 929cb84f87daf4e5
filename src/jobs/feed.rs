//! Remote job feed: response shapes and the HTTP client.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use super::Job;

#[derive(Debug, Error, PartialEq)]
pub enum FeedShapeError {
    #[error("no jobs array found in the response")]
    MissingJobsArray,
}

/// Extracts and normalizes the job records of a feed body.
///
/// The endpoint has served both a bare array and an object wrapping the
/// array under `jobs`; both are accepted and produce identical output.
pub fn parse_feed(body: &Value) -> Result<Vec<Job>> {
    let records = match body {
        Value::Array(records) => records,
        Value::Object(fields) => match fields.get("jobs") {
            Some(Value::Array(records)) => records,
            _ => return Err(FeedShapeError::MissingJobsArray.into()),
        },
        _ => return Err(FeedShapeError::MissingJobsArray.into()),
    };
    Ok(records.iter().map(Job::from_raw).collect())
}

/// Source of job postings.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait JobFeed: Send + Sync {
    /// Fetches the current job list.
    /// Returns Err on transport, decode or shape failures.
    async fn fetch_jobs(&self) -> Result<Vec<Job>>;
}

/// `JobFeed` backed by a single unauthenticated GET to a fixed URL.
pub struct HttpJobFeed {
    client: reqwest::Client,
    url: String,
}

impl HttpJobFeed {
    /// No request timeout is configured, the transport default applies.
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl JobFeed for HttpJobFeed {
    async fn fetch_jobs(&self) -> Result<Vec<Job>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("Failed to reach the job feed")?;

        if !response.status().is_success() {
            bail!("Job feed request failed with status {}", response.status());
        }

        let body: Value = response
            .json()
            .await
            .context("Failed to decode the job feed body")?;

        parse_feed(&body)
    }
}
