use std::time::Duration;

use enhance_client::{ClientSettings, FailureKind, JobsFetcher, ReqwestJobsFetcher};
use enhance_core::JobStatus;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> ClientSettings {
    ClientSettings {
        base_url: format!("{}/", server.uri()),
        ..ClientSettings::default()
    }
}

#[tokio::test]
async fn fetches_and_decodes_job_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jobs": [
                {
                    "id": "job-1",
                    "originalFilename": "a.mp4",
                    "fileType": "video/mp4",
                    "fileSize": 10,
                    "status": "processing",
                    "createdAt": "2024-06-01T08:00:00Z",
                    "progress": 40
                },
                {
                    "id": "job-2",
                    "originalFilename": "b.mp4",
                    "status": "paused",
                    "createdAt": "2024-06-01T09:00:00Z"
                }
            ]
        })))
        .mount(&server)
        .await;

    let fetcher = ReqwestJobsFetcher::new(&settings_for(&server)).expect("fetcher");
    assert!(fetcher.jobs_url().as_str().ends_with("/api/jobs"));

    let jobs = fetcher.fetch_jobs().await.expect("fetch ok");
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].status, JobStatus::Processing);
    assert_eq!(jobs[0].progress, Some(40.0));
    assert_eq!(jobs[1].status, JobStatus::Unknown);
    assert_eq!(jobs[1].file_size, 0);
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let fetcher = ReqwestJobsFetcher::new(&settings_for(&server)).expect("fetcher");
    let err = fetcher.fetch_jobs().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(503));
    assert_eq!(err.banner(), "Failed to fetch jobs: http status 503");
}

#[tokio::test]
async fn malformed_body_is_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let fetcher = ReqwestJobsFetcher::new(&settings_for(&server)).expect("fetcher");
    let err = fetcher.fetch_jobs().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(300))
                .set_body_json(json!({ "jobs": [] })),
        )
        .mount(&server)
        .await;

    let settings = ClientSettings {
        request_timeout: Duration::from_millis(50),
        ..settings_for(&server)
    };
    let fetcher = ReqwestJobsFetcher::new(&settings).expect("fetcher");
    let err = fetcher.fetch_jobs().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[test]
fn invalid_base_url_is_rejected() {
    let settings = ClientSettings {
        base_url: "not a url".to_string(),
        ..ClientSettings::default()
    };
    let err = ReqwestJobsFetcher::new(&settings).unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
