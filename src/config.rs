use std::path::PathBuf;

/// The public job feed the app ships against.
pub const DEFAULT_JOB_FEED_URL: &str = "https://empllo.com/api/v1";

/// Application configuration, resolved in code by the embedding shell.
/// There are no config files, flags or environment variables to read.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// URL of the job feed endpoint.
    pub feed_url: String,
    /// Where to keep the on-device storage database.
    /// None keeps storage in memory (nothing survives a restart).
    pub storage_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_JOB_FEED_URL.to_string(),
            storage_path: None,
        }
    }
}
