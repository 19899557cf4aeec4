use std::time::Duration;

use enhance_core::{join_url, Job, JOBS_PATH};
use enhance_logging::enhance_debug;
use serde::Deserialize;

use crate::{FailureKind, FetchError};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Deserialize)]
struct JobsResponse {
    jobs: Vec<Job>,
}

/// Source of the job list; the seam the poller is tested through.
#[async_trait::async_trait]
pub trait JobsFetcher: Send + Sync {
    async fn fetch_jobs(&self) -> Result<Vec<Job>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestJobsFetcher {
    client: reqwest::Client,
    jobs_url: reqwest::Url,
}

impl ReqwestJobsFetcher {
    pub fn new(settings: &ClientSettings) -> Result<Self, FetchError> {
        let jobs_url = reqwest::Url::parse(&join_url(&settings.base_url, JOBS_PATH))
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { client, jobs_url })
    }

    pub fn jobs_url(&self) -> &reqwest::Url {
        &self.jobs_url
    }
}

#[async_trait::async_trait]
impl JobsFetcher for ReqwestJobsFetcher {
    async fn fetch_jobs(&self) -> Result<Vec<Job>, FetchError> {
        let response = self
            .client
            .get(self.jobs_url.clone())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        enhance_debug!("GET {} returned {} bytes", self.jobs_url, body.len());
        let parsed: JobsResponse = serde_json::from_slice(&body)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;
        Ok(parsed.jobs)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
