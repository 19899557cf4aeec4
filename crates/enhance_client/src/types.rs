use std::fmt;

use enhance_core::{Generation, Job};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// Request `generation` was issued.
    PollStarted { generation: Generation },
    JobsFetched {
        generation: Generation,
        jobs: Vec<Job>,
    },
    FetchFailed {
        generation: Generation,
        error: FetchError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Text shown in place of the job table.
    pub fn banner(&self) -> String {
        format!("Failed to fetch jobs: {}", self.kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    /// The body was not a `{ "jobs": [...] }` document.
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "malformed response"),
        }
    }
}
