//! Enhance console core: job model, statistics, formatting and the pure
//! dashboard state machine.
mod ai_tools;
mod effect;
mod format;
mod job;
mod msg;
mod routes;
mod state;
mod stats;
mod update;
mod view_model;

pub use ai_tools::{AiModelId, AiToolsState, AiToolsView, ToolTab, DEFAULT_MODEL, SELECTED_MODEL_KEY};
pub use effect::Effect;
pub use format::{
    badge_color, enabled_label, format_duration_secs, format_file_size, format_progress,
    format_time, format_time_of_day, format_timestamp, short_job_id, status_label, BadgeColor,
    INVALID_DATE,
};
pub use job::{
    parse_timestamp, EnhancementOptions, Job, JobId, JobStatus, LogEntry, LogLevel, VideoInfo,
};
pub use msg::Msg;
pub use routes::{job_download_path, job_stream_path, join_url, JOBS_PATH};
pub use state::{AppState, Generation, Tab, DEFAULT_POLL_INTERVAL};
pub use stats::{
    compute_stats, compute_stats_in, DashboardStats, DayCount, StatusSlice, COMPLETED_COLOR,
    FAILED_COLOR, HISTOGRAM_DAYS, PROCESSING_COLOR,
};
pub use update::update;
pub use view_model::{
    job_detail_view, AppViewModel, JobDetailView, JobRowView, JobsPanel, LabeledValue,
    LogLineView, OverviewView,
};
