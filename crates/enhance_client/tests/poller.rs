use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::time::{Duration, Instant};

use enhance_client::{
    ChannelEventSink, ClientEvent, FailureKind, FetchError, JobsFetcher, PollSettings, Poller,
};
use enhance_core::Job;
use serde_json::json;

const WAIT: Duration = Duration::from_secs(5);

fn init_logging() {
    enhance_logging::initialize_for_tests();
}

fn sample_job(id: &str) -> Job {
    serde_json::from_value(json!({
        "id": id,
        "originalFilename": "clip.mp4",
        "status": "queued",
        "createdAt": "2024-06-01T08:00:00Z",
    }))
    .expect("job fixture")
}

/// Serves scripted delays; calls past the script answer immediately.
struct ScriptedFetcher {
    calls: AtomicUsize,
    delays: Vec<Duration>,
    fail: bool,
}

impl ScriptedFetcher {
    fn new(delays: Vec<Duration>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            delays,
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(Vec::new())
        }
    }
}

#[async_trait::async_trait]
impl JobsFetcher for ScriptedFetcher {
    async fn fetch_jobs(&self) -> Result<Vec<Job>, FetchError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(call) {
            tokio::time::sleep(*delay).await;
        }
        if self.fail {
            return Err(FetchError {
                kind: FailureKind::HttpStatus(500),
                message: "500 Internal Server Error".to_string(),
            });
        }
        Ok(vec![sample_job(&format!("call-{call}"))])
    }
}

fn start(fetcher: ScriptedFetcher, interval: Duration) -> (Poller, mpsc::Receiver<ClientEvent>) {
    let (tx, rx) = mpsc::channel();
    let poller = Poller::start(
        Arc::new(fetcher),
        PollSettings { interval },
        Arc::new(ChannelEventSink::new(tx)),
    )
    .expect("poller starts");
    (poller, rx)
}

fn recv_until<F>(rx: &mpsc::Receiver<ClientEvent>, mut done: F) -> Vec<ClientEvent>
where
    F: FnMut(&ClientEvent) -> bool,
{
    let deadline = Instant::now() + WAIT;
    let mut seen = Vec::new();
    while let Some(remaining) = deadline.checked_duration_since(Instant::now()) {
        match rx.recv_timeout(remaining) {
            Ok(event) => {
                let finished = done(&event);
                seen.push(event);
                if finished {
                    return seen;
                }
            }
            Err(_) => break,
        }
    }
    panic!("expected event never arrived; saw {seen:?}");
}

fn result_generation(event: &ClientEvent) -> Option<u64> {
    match event {
        ClientEvent::JobsFetched { generation, .. } | ClientEvent::FetchFailed { generation, .. } => {
            Some(*generation)
        }
        ClientEvent::PollStarted { .. } => None,
    }
}

#[test]
fn first_poll_happens_immediately() {
    init_logging();
    let (mut poller, rx) = start(ScriptedFetcher::new(Vec::new()), Duration::from_secs(3600));

    let events = recv_until(&rx, |event| result_generation(event).is_some());
    assert_eq!(events[0], ClientEvent::PollStarted { generation: 1 });
    match &events[1] {
        ClientEvent::JobsFetched { generation, jobs } => {
            assert_eq!(*generation, 1);
            assert_eq!(jobs[0].id, "call-0");
        }
        other => panic!("unexpected event {other:?}"),
    }
    poller.stop();
}

#[test]
fn failures_are_reported_with_their_generation() {
    init_logging();
    let (mut poller, rx) = start(ScriptedFetcher::failing(), Duration::from_secs(3600));

    let events = recv_until(&rx, |event| result_generation(event).is_some());
    match events.last() {
        Some(ClientEvent::FetchFailed { generation, error }) => {
            assert_eq!(*generation, 1);
            assert_eq!(error.kind, FailureKind::HttpStatus(500));
        }
        other => panic!("unexpected event {other:?}"),
    }
    poller.stop();
}

#[test]
fn slow_request_is_aborted_when_next_tick_fires() {
    init_logging();
    let fetcher = ScriptedFetcher::new(vec![Duration::from_millis(800)]);
    let (mut poller, rx) = start(fetcher, Duration::from_millis(100));

    let events = recv_until(&rx, |event| result_generation(event) == Some(2));
    poller.stop();
    let mut all: Vec<ClientEvent> = events;
    all.extend(rx.try_iter());

    assert!(all.contains(&ClientEvent::PollStarted { generation: 1 }));
    assert!(all.contains(&ClientEvent::PollStarted { generation: 2 }));
    assert!(
        all.iter().all(|event| result_generation(event) != Some(1)),
        "aborted request delivered a result: {all:?}"
    );
}

#[test]
fn refresh_polls_out_of_schedule() {
    init_logging();
    let (mut poller, rx) = start(ScriptedFetcher::new(Vec::new()), Duration::from_secs(3600));
    recv_until(&rx, |event| result_generation(event) == Some(1));

    poller.refresh();
    let events = recv_until(&rx, |event| result_generation(event) == Some(2));
    assert_eq!(events[0], ClientEvent::PollStarted { generation: 2 });
    poller.stop();
}

#[test]
fn stop_ends_event_delivery() {
    init_logging();
    let (mut poller, rx) = start(ScriptedFetcher::new(Vec::new()), Duration::from_millis(20));
    recv_until(&rx, |event| result_generation(event) == Some(2));

    poller.stop();
    assert!(!poller.is_running());
    let _: Vec<ClientEvent> = rx.try_iter().collect();
    std::thread::sleep(Duration::from_millis(150));
    assert!(rx.try_recv().is_err());

    // Stopping twice is harmless.
    poller.stop();
}
