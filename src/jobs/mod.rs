mod feed;
mod job;
mod search;

pub use feed::{parse_feed, FeedShapeError, HttpJobFeed, JobFeed};
pub use job::Job;
pub use search::filter_jobs;

#[cfg(feature = "mock")]
pub use feed::MockJobFeed;
