use crate::{AiModelId, Generation, Job, JobId, Tab, ToolTab};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// The dashboard became visible; polling should begin.
    Mounted,
    /// The dashboard is being torn down; polling should stop.
    Unmounted,
    /// The poller issued request `generation`.
    PollStarted { generation: Generation },
    /// Request `generation` returned a job list.
    JobsLoaded { generation: Generation, jobs: Vec<Job> },
    /// Request `generation` failed.
    JobsFailed { generation: Generation, message: String },
    TabSelected(Tab),
    /// User asked for the details of a job (full id or unique prefix).
    JobDetailsRequested { job_id: JobId },
    /// Console was opened on a specific job; resolved once it is loaded.
    JobRequested { job_id: JobId },
    BackToJobs,
    RefreshRequested,
    DownloadRequested { job_id: JobId },
    ToolTabSelected(ToolTab),
    /// User picked a model in the AI-tools page.
    ModelSelected(AiModelId),
    /// Restore the model loaded from preferences.
    RestoreSelectedModel(AiModelId),
    /// UI/render tick to coalesce rendering.
    Tick,
    NoOp,
}
