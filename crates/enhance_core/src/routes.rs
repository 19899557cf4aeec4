//! Paths of the job API the console talks to or links to.

pub const JOBS_PATH: &str = "/api/jobs";

pub fn job_download_path(job_id: &str) -> String {
    format!("{JOBS_PATH}/{job_id}/download")
}

pub fn job_stream_path(job_id: &str) -> String {
    format!("{JOBS_PATH}/{job_id}/stream")
}

/// Joins an API path onto a base URL, tolerating a trailing slash.
pub fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
