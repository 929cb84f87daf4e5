//! Query filtering over the normalized job list.

use super::Job;

/// Returns the jobs matching `query`, preserving feed order.
///
/// Matching is a case-insensitive substring check over title, company
/// name, main category and tags. A blank query matches everything.
pub fn filter_jobs(jobs: &[Job], query: &str) -> Vec<Job> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return jobs.to_vec();
    }
    jobs.iter()
        .filter(|job| matches_query(job, &query))
        .cloned()
        .collect()
}

fn matches_query(job: &Job, query: &str) -> bool {
    job.title.to_lowercase().contains(query)
        || job.company_name.to_lowercase().contains(query)
        || job.main_category.to_lowercase().contains(query)
        || job.tags.iter().any(|tag| tag.to_lowercase().contains(query))
}
