//! Global application state.
//!
//! One `AppState` is constructed at startup and handed to every consumer;
//! clones share the same underlying state. All mutations take effect
//! atomically under their lock, so observers see either the old value or
//! the new one, never a partial update.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use tracing::{error, info};

use crate::applications::{ApplicationError, ApplicationForm, SubmittedApplication};
use crate::config::AppConfig;
use crate::jobs::{filter_jobs, HttpJobFeed, Job, JobFeed};
use crate::saved_jobs::SavedJobsStore;
use crate::storage::{KeyValueStorage, SqliteKeyValueStorage};

#[derive(Clone)]
pub struct AppState {
    feed: Arc<dyn JobFeed>,
    saved_jobs: Arc<SavedJobsStore>,
    jobs: Arc<Mutex<Vec<Job>>>,
    loading: Arc<AtomicBool>,
    dark_mode: Arc<AtomicBool>,
    applications: Arc<Mutex<Vec<SubmittedApplication>>>,
}

impl AppState {
    /// Builds the state with the default collaborators: an HTTP feed at
    /// the configured URL and SQLite-backed device storage (in memory
    /// when no path is configured).
    pub fn new(config: &AppConfig) -> Result<Self> {
        let storage: Arc<dyn KeyValueStorage> = match &config.storage_path {
            Some(path) => Arc::new(SqliteKeyValueStorage::open(path)?),
            None => Arc::new(SqliteKeyValueStorage::open_in_memory()?),
        };
        let feed = Arc::new(HttpJobFeed::new(config.feed_url.clone()));
        Ok(Self::with_collaborators(feed, storage))
    }

    /// Builds the state around injected collaborators.
    pub fn with_collaborators(
        feed: Arc<dyn JobFeed>,
        storage: Arc<dyn KeyValueStorage>,
    ) -> Self {
        Self {
            feed,
            saved_jobs: Arc::new(SavedJobsStore::new(storage)),
            jobs: Arc::new(Mutex::new(Vec::new())),
            loading: Arc::new(AtomicBool::new(false)),
            dark_mode: Arc::new(AtomicBool::new(false)),
            applications: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Startup sequence: load the saved-job set, then kick off the first
    /// feed refresh as a detached task. The two are independent.
    ///
    /// Must be called from within a tokio runtime.
    pub fn init(&self) {
        self.saved_jobs.load();
        let state = self.clone();
        tokio::spawn(async move {
            state.refresh_jobs().await;
        });
    }

    /// Fetches the feed and replaces the job list wholesale.
    ///
    /// On any failure the previous list is kept and the error is logged;
    /// nothing propagates to the caller. Overlapping refreshes are not
    /// cancelled, the later completion wins. The loading flag brackets
    /// the attempt regardless of outcome.
    pub async fn refresh_jobs(&self) {
        self.loading.store(true, Ordering::SeqCst);
        match self.feed.fetch_jobs().await {
            Ok(jobs) => {
                info!("Feed refresh succeeded, {} jobs", jobs.len());
                *self.jobs.lock().unwrap() = jobs;
            }
            Err(err) => error!("Failed to refresh jobs: {:#}", err),
        }
        self.loading.store(false, Ordering::SeqCst);
    }

    /// The current job list, in feed order.
    pub fn jobs(&self) -> Vec<Job> {
        self.jobs.lock().unwrap().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Jobs matching `query`; a blank query returns the whole list.
    pub fn search_jobs(&self, query: &str) -> Vec<Job> {
        filter_jobs(&self.jobs.lock().unwrap(), query)
    }

    /// Saves `id` if it is not saved, un-saves it otherwise. Returns
    /// whether the job is saved afterwards.
    pub fn toggle_save_job(&self, id: &str) -> bool {
        self.saved_jobs.toggle(id)
    }

    pub fn is_job_saved(&self, id: &str) -> bool {
        self.saved_jobs.is_saved(id)
    }

    /// The saved ids in save order. Ids whose job has dropped out of the
    /// feed are kept; a bookmark outlives the posting.
    pub fn saved_job_ids(&self) -> Vec<String> {
        self.saved_jobs.ids()
    }

    /// The saved jobs that exist in the current list, in feed order.
    pub fn saved_jobs(&self) -> Vec<Job> {
        let saved = self.saved_jobs.ids();
        self.jobs
            .lock()
            .unwrap()
            .iter()
            .filter(|job| saved.contains(&job.id))
            .cloned()
            .collect()
    }

    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode.load(Ordering::SeqCst)
    }

    /// Flips the theme flag and returns the new value.
    pub fn toggle_dark_mode(&self) -> bool {
        !self.dark_mode.fetch_xor(true, Ordering::SeqCst)
    }

    /// Validates and records a mock application. Nothing is sent anywhere.
    pub fn submit_application(
        &self,
        form: ApplicationForm,
    ) -> Result<SubmittedApplication, ApplicationError> {
        form.validate()?;
        let submitted = SubmittedApplication::from_form(form);
        info!(
            "Recorded application {} for job {}",
            submitted.id, submitted.job_id
        );
        self.applications.lock().unwrap().push(submitted.clone());
        Ok(submitted)
    }

    /// All applications submitted this session, oldest first.
    pub fn applications(&self) -> Vec<SubmittedApplication> {
        self.applications.lock().unwrap().clone()
    }
}
