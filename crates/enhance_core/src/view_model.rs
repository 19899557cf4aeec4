use crate::ai_tools::AiToolsView;
use crate::format::{
    badge_color, enabled_label, format_duration_secs, format_file_size, format_progress,
    format_time, format_time_of_day, format_timestamp, short_job_id, status_label, BadgeColor,
};
use crate::job::{Job, JobId, JobStatus, LogLevel};
use crate::routes::{job_download_path, job_stream_path};
use crate::stats::{DayCount, StatusSlice};
use crate::{AppState, Tab};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    /// Tabs to show, with Details only present while a job is selected.
    pub tabs: Vec<Tab>,
    pub active_tab: Tab,
    pub overview: OverviewView,
    pub jobs_panel: JobsPanel,
    pub details: Option<JobDetailView>,
    pub ai_tools: AiToolsView,
    pub polling: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewView {
    pub total_jobs: usize,
    pub completed_jobs: usize,
    pub processing_jobs: usize,
    pub failed_jobs: usize,
    pub average_processing_time: String,
    pub jobs_by_day: Vec<DayCount>,
    pub status_distribution: Vec<StatusSlice>,
}

/// What the job table area shows. An error replaces the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobsPanel {
    Loading,
    Error(String),
    Empty,
    Table(Vec<JobRowView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRowView {
    pub job_id: JobId,
    pub short_id: String,
    pub file_name: String,
    pub status: JobStatus,
    pub status_label: String,
    pub badge: BadgeColor,
    pub created: String,
    pub progress: String,
    pub download_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledValue {
    pub label: &'static str,
    pub value: String,
}

impl LabeledValue {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLineView {
    pub time: String,
    pub level: LogLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDetailView {
    pub job_id: JobId,
    pub status_label: String,
    pub badge: BadgeColor,
    pub file_info: Vec<LabeledValue>,
    pub processing_info: Vec<LabeledValue>,
    /// `None` when the job carries no enhancement options.
    pub enhancement_options: Option<Vec<LabeledValue>>,
    pub video_info: Option<Vec<LabeledValue>>,
    pub stream_path: Option<String>,
    pub download_path: Option<String>,
    pub logs: Vec<LogLineView>,
}

impl AppState {
    pub fn view(&self) -> AppViewModel {
        let mut tabs = vec![Tab::Overview, Tab::Jobs, Tab::Cache];
        if self.selected_job().is_some() {
            tabs.push(Tab::Details);
        }

        AppViewModel {
            tabs,
            active_tab: self.active_tab(),
            overview: self.overview(),
            jobs_panel: self.jobs_panel(),
            details: self.selected_job().map(job_detail_view),
            ai_tools: self.ai_tools().view(),
            polling: self.is_polling(),
        }
    }

    fn overview(&self) -> OverviewView {
        let stats = self.stats();
        OverviewView {
            total_jobs: stats.total_jobs,
            completed_jobs: stats.completed_jobs,
            processing_jobs: stats.processing_jobs,
            failed_jobs: stats.failed_jobs,
            average_processing_time: format_time(stats.average_processing_time),
            jobs_by_day: stats.jobs_by_day.clone(),
            status_distribution: stats.status_distribution.clone(),
        }
    }

    fn jobs_panel(&self) -> JobsPanel {
        if self.is_loading() {
            JobsPanel::Loading
        } else if let Some(message) = self.error() {
            JobsPanel::Error(message.to_string())
        } else if self.jobs().is_empty() {
            JobsPanel::Empty
        } else {
            JobsPanel::Table(self.jobs().iter().map(job_row_view).collect())
        }
    }
}

fn job_row_view(job: &Job) -> JobRowView {
    JobRowView {
        job_id: job.id.clone(),
        short_id: short_job_id(&job.id),
        file_name: job.original_filename.clone(),
        status: job.status,
        status_label: status_label(job.status),
        badge: badge_color(job.status),
        created: format_timestamp(&job.created_at),
        progress: format_progress(job.progress),
        download_path: job.is_completed().then(|| job_download_path(&job.id)),
    }
}

fn non_empty(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().filter(|text| !text.trim().is_empty())
}

pub fn job_detail_view(job: &Job) -> JobDetailView {
    let file_info = vec![
        LabeledValue::new("File Name", job.original_filename.clone()),
        LabeledValue::new("File Type", job.file_type.clone()),
        LabeledValue::new("File Size", format_file_size(job.file_size)),
        LabeledValue::new("Job ID", job.id.clone()),
    ];

    let mut processing_info = vec![LabeledValue::new(
        "Created",
        format_timestamp(&job.created_at),
    )];
    if let Some(started) = non_empty(&job.processing_started_at) {
        processing_info.push(LabeledValue::new(
            "Processing Started",
            format_timestamp(started),
        ));
    }
    if let Some(completed) = non_empty(&job.processing_completed_at) {
        processing_info.push(LabeledValue::new(
            "Processing Completed",
            format_timestamp(completed),
        ));
    }
    if let Some(elapsed) = job.processing_duration() {
        let seconds = elapsed.num_milliseconds() as f64 / 1000.0;
        processing_info.push(LabeledValue::new(
            "Processing Time",
            format_duration_secs(seconds),
        ));
    }

    let enhancement_options = job.enhancement_options.as_ref().map(|options| {
        let mut rows = vec![
            LabeledValue::new("Target Resolution", options.resolution.clone()),
            LabeledValue::new("Quality Level", format!("{}%", options.quality)),
            LabeledValue::new("Auto Color Correction", enabled_label(options.auto_color)),
            LabeledValue::new("Noise Reduction", enabled_label(options.denoise)),
        ];
        let optional = [
            ("Video Stabilization", options.stabilize),
            ("Detail Enhancement", options.enhance_details),
            ("HDR Effect", options.hdr_effect),
        ];
        rows.extend(
            optional
                .into_iter()
                .filter_map(|(label, flag)| flag.map(|on| LabeledValue::new(label, enabled_label(on)))),
        );
        rows
    });

    let video_info = job.video_info.as_ref().map(|info| {
        vec![
            LabeledValue::new("Resolution", format!("{}x{}", info.width, info.height)),
            LabeledValue::new("Duration", format_duration_secs(info.duration)),
            LabeledValue::new("Codec", info.codec_name.clone()),
        ]
    });

    let logs = job
        .logs
        .iter()
        .flatten()
        .map(|entry| LogLineView {
            time: format_time_of_day(&entry.timestamp),
            level: entry.level,
            message: entry.message.clone(),
        })
        .collect();

    let completed = job.is_completed();
    JobDetailView {
        job_id: job.id.clone(),
        status_label: status_label(job.status),
        badge: badge_color(job.status),
        file_info,
        processing_info,
        enhancement_options,
        video_info,
        stream_path: completed.then(|| job_stream_path(&job.id)),
        download_path: completed.then(|| job_download_path(&job.id)),
        logs,
    }
}
