use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::ai_tools::{AiModelId, AiToolsState, ToolTab};
use crate::job::{Job, JobId};
use crate::stats::{compute_stats, DashboardStats};

/// Sequence number of a poll request. Later requests have larger numbers.
pub type Generation = u64;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    Overview,
    #[default]
    Jobs,
    Cache,
    Details,
}

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Jobs => "Processing Jobs",
            Tab::Cache => "Cache Manager",
            Tab::Details => "Job Details",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "overview" => Ok(Tab::Overview),
            "jobs" => Ok(Tab::Jobs),
            "cache" => Ok(Tab::Cache),
            "details" => Ok(Tab::Details),
            other => Err(format!("unknown tab '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    jobs: Vec<Job>,
    loading: bool,
    error: Option<String>,
    selected_job: Option<Job>,
    pending_job: Option<JobId>,
    active_tab: Tab,
    stats: DashboardStats,
    latest_generation: Generation,
    polling: bool,
    poll_interval: Duration,
    ai_tools: AiToolsState,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            jobs: Vec::new(),
            loading: true,
            error: None,
            selected_job: None,
            pending_job: None,
            active_tab: Tab::default(),
            stats: DashboardStats::default(),
            latest_generation: 0,
            polling: false,
            poll_interval: DEFAULT_POLL_INTERVAL,
            ai_tools: AiToolsState::default(),
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected_job(&self) -> Option<&Job> {
        self.selected_job.as_ref()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn stats(&self) -> &DashboardStats {
        &self.stats
    }

    pub fn latest_generation(&self) -> Generation {
        self.latest_generation
    }

    pub fn is_polling(&self) -> bool {
        self.polling
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub fn ai_tools(&self) -> &AiToolsState {
        &self.ai_tools
    }

    /// Returns whether anything visible changed since the last call.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Finds a job by exact id, falling back to a unique id prefix.
    pub fn find_job(&self, key: &str) -> Option<&Job> {
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        if let Some(job) = self.jobs.iter().find(|job| job.id == key) {
            return Some(job);
        }
        let mut matches = self.jobs.iter().filter(|job| job.id.starts_with(key));
        match (matches.next(), matches.next()) {
            (Some(job), None) => Some(job),
            _ => None,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn start_polling(&mut self) -> bool {
        if self.polling {
            return false;
        }
        self.polling = true;
        self.loading = true;
        self.mark_dirty();
        true
    }

    pub(crate) fn stop_polling(&mut self) -> bool {
        std::mem::replace(&mut self.polling, false)
    }

    pub(crate) fn is_stale(&self, generation: Generation) -> bool {
        generation < self.latest_generation
    }

    pub(crate) fn note_generation(&mut self, generation: Generation) {
        self.latest_generation = self.latest_generation.max(generation);
    }

    pub(crate) fn begin_poll(&mut self, generation: Generation) {
        if generation <= self.latest_generation {
            return;
        }
        self.latest_generation = generation;
        if !self.loading {
            self.loading = true;
            self.mark_dirty();
        }
    }

    pub(crate) fn replace_jobs(&mut self, jobs: Vec<Job>) {
        self.stats = compute_stats(&jobs);
        self.jobs = jobs;
        self.loading = false;
        self.error = None;

        if let Some(selected_id) = self.selected_job.as_ref().map(|job| job.id.clone()) {
            if let Some(fresh) = self.jobs.iter().find(|job| job.id == selected_id) {
                self.selected_job = Some(fresh.clone());
            }
        }
        self.resolve_pending_job();
        self.mark_dirty();
    }

    pub(crate) fn fail_poll(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
        self.mark_dirty();
    }

    pub(crate) fn select_tab(&mut self, tab: Tab) -> bool {
        if tab == Tab::Details && self.selected_job.is_none() {
            return false;
        }
        if self.active_tab == tab {
            return false;
        }
        self.active_tab = tab;
        self.mark_dirty();
        true
    }

    pub(crate) fn open_details(&mut self, key: &str) -> bool {
        let Some(job) = self.find_job(key).cloned() else {
            return false;
        };
        self.selected_job = Some(job);
        self.active_tab = Tab::Details;
        self.mark_dirty();
        true
    }

    pub(crate) fn request_job(&mut self, job_id: JobId) {
        self.pending_job = Some(job_id);
        self.resolve_pending_job();
    }

    pub(crate) fn back_to_jobs(&mut self) {
        self.selected_job = None;
        self.active_tab = Tab::Jobs;
        self.mark_dirty();
    }

    pub(crate) fn select_tool(&mut self, tool: ToolTab) {
        if self.ai_tools.active_tool != tool {
            self.ai_tools.active_tool = tool;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_model(&mut self, model: AiModelId) -> bool {
        if self.ai_tools.selected_model == model {
            return false;
        }
        self.ai_tools.selected_model = model;
        self.mark_dirty();
        true
    }

    fn resolve_pending_job(&mut self) {
        let Some(job_id) = self.pending_job.clone() else {
            return;
        };
        if self.open_details(&job_id) {
            self.pending_job = None;
        }
    }
}
