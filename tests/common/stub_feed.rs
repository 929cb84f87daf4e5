//! A scripted job feed for driving the application state in tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use jobfinder_core::{Job, JobFeed};

/// Hands out queued responses in order; once the script is exhausted it
/// keeps answering with an empty list.
#[derive(Default)]
pub struct StubJobFeed {
    responses: Mutex<VecDeque<Result<Vec<Job>, String>>>,
}

impl StubJobFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_jobs(&self, jobs: Vec<Job>) {
        self.responses.lock().unwrap().push_back(Ok(jobs));
    }

    pub fn push_error(&self, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
    }
}

#[async_trait]
impl JobFeed for StubJobFeed {
    async fn fetch_jobs(&self) -> Result<Vec<Job>> {
        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(jobs)) => Ok(jobs),
            Some(Err(message)) => Err(anyhow!(message)),
            None => Ok(Vec::new()),
        }
    }
}
