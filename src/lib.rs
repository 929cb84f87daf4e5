//! JobFinder Core Library
//!
//! The headless core of the JobFinder mobile app: feed fetching and
//! normalization, saved-job persistence, mock application submission and
//! the shared application state the presentation layer consumes. The UI
//! shell constructs an [`AppState`] once at startup, calls
//! [`AppState::init`], and reads and mutates everything through it.

pub mod applications;
pub mod config;
pub mod jobs;
pub mod saved_jobs;
pub mod state;
pub mod storage;

// Re-export commonly used types for convenience
pub use applications::{ApplicationError, ApplicationForm, SubmittedApplication};
pub use config::{AppConfig, DEFAULT_JOB_FEED_URL};
pub use jobs::{filter_jobs, FeedShapeError, HttpJobFeed, Job, JobFeed};
pub use saved_jobs::{SavedJobsStore, SAVED_JOBS_STORAGE_KEY};
pub use state::AppState;
pub use storage::{KeyValueStorage, MemoryKeyValueStorage, SqliteKeyValueStorage};
