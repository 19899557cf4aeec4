//! Periodic job-list polling with cancellation and stale-request abort.
//!
//! Every request carries a generation number. When a new request is issued
//! while the previous one is still in flight, the previous one is aborted, so
//! at most one request is outstanding and results arrive in generation order.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use enhance_core::{Generation, DEFAULT_POLL_INTERVAL};
use enhance_logging::{enhance_debug, enhance_info};
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::{ClientEvent, JobsFetcher};

#[derive(Debug, Clone)]
pub struct PollSettings {
    pub interval: Duration,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

#[derive(Debug, Error)]
pub enum PollerError {
    #[error("failed to start poller runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

pub trait EventSink: Send + Sync {
    fn emit(&self, event: ClientEvent);
}

pub struct ChannelEventSink {
    tx: std::sync::mpsc::Sender<ClientEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: std::sync::mpsc::Sender<ClientEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: ClientEvent) {
        let _ = self.tx.send(event);
    }
}

enum PollCommand {
    Refresh,
}

/// Handle to a running poll loop. Dropping it stops the loop.
pub struct Poller {
    cmd_tx: mpsc::UnboundedSender<PollCommand>,
    cancel: CancellationToken,
    worker: Option<thread::JoinHandle<()>>,
}

impl Poller {
    /// Starts polling: one request right away, then one per interval.
    pub fn start(
        fetcher: Arc<dyn JobsFetcher>,
        settings: PollSettings,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, PollerError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("enhance-poller")
            .enable_all()
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();

        let loop_cancel = cancel.clone();
        let worker = thread::Builder::new()
            .name("enhance-poll-loop".to_string())
            .spawn(move || {
                runtime.block_on(poll_loop(
                    fetcher,
                    sink,
                    settings.interval,
                    loop_cancel,
                    cmd_rx,
                ));
            })?;

        enhance_info!("Job poller started");
        Ok(Self {
            cmd_tx,
            cancel,
            worker: Some(worker),
        })
    }

    /// Polls now without waiting for the next tick.
    pub fn refresh(&self) {
        let _ = self.cmd_tx.send(PollCommand::Refresh);
    }

    /// Stops the loop and aborts any request in flight. No events are
    /// emitted once this returns.
    pub fn stop(&mut self) {
        self.cancel.cancel();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
            enhance_info!("Job poller stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn poll_loop(
    fetcher: Arc<dyn JobsFetcher>,
    sink: Arc<dyn EventSink>,
    interval: Duration,
    cancel: CancellationToken,
    mut cmd_rx: mpsc::UnboundedReceiver<PollCommand>,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut generation: Generation = 0;
    let mut in_flight: Option<JoinHandle<()>> = None;

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            command = cmd_rx.recv() => match command {
                Some(PollCommand::Refresh) => ticker.reset(),
                None => break,
            },
            _ = ticker.tick() => {}
        }

        if let Some(previous) = in_flight.take() {
            if !previous.is_finished() {
                enhance_debug!("Aborting poll {} still in flight", generation);
                previous.abort();
            }
        }

        generation += 1;
        sink.emit(ClientEvent::PollStarted { generation });
        in_flight = Some(tokio::spawn(run_request(
            fetcher.clone(),
            sink.clone(),
            generation,
        )));
    }

    if let Some(previous) = in_flight.take() {
        previous.abort();
        let _ = previous.await;
    }
}

async fn run_request(fetcher: Arc<dyn JobsFetcher>, sink: Arc<dyn EventSink>, generation: Generation) {
    match fetcher.fetch_jobs().await {
        Ok(jobs) => sink.emit(ClientEvent::JobsFetched { generation, jobs }),
        Err(error) => sink.emit(ClientEvent::FetchFailed { generation, error }),
    }
}
