use std::time::Duration;

use crate::AiModelId;

/// Side effects requested by [`crate::update`]; executed by the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Begin polling the job list: once now, then every `interval`.
    StartPolling { interval: Duration },
    StopPolling,
    /// Poll immediately, outside the regular schedule.
    RefreshNow,
    /// Hand the download path of a completed job to the user.
    OpenDownload { path: String },
    PersistSelectedModel { model: AiModelId },
}
