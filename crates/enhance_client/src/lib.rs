//! Enhance console client: job API access, polling and local state files.
mod fetch;
mod persist;
mod poller;
mod types;

pub use fetch::{ClientSettings, JobsFetcher, ReqwestJobsFetcher, DEFAULT_BASE_URL};
pub use persist::{ensure_state_dir, PersistError, StateDir};
pub use poller::{ChannelEventSink, EventSink, PollSettings, Poller, PollerError};
pub use types::{ClientEvent, FailureKind, FetchError};
