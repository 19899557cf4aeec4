//! Aggregate statistics for the dashboard overview and its charts.

use chrono::{Local, NaiveDate, TimeZone};
use enhance_logging::enhance_debug;

use crate::job::{Job, JobStatus};

/// Number of calendar days kept in the activity histogram.
pub const HISTOGRAM_DAYS: usize = 7;

pub const COMPLETED_COLOR: &str = "#10b981";
pub const FAILED_COLOR: &str = "#ef4444";
pub const PROCESSING_COLOR: &str = "#3b82f6";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCount {
    pub date: NaiveDate,
    pub count: usize,
}

impl DayCount {
    pub fn label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSlice {
    pub label: &'static str,
    pub count: usize,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total_jobs: usize,
    pub completed_jobs: usize,
    pub failed_jobs: usize,
    /// Jobs that are queued or processing.
    pub processing_jobs: usize,
    /// Mean processing time of completed jobs, in whole seconds.
    pub average_processing_time: u64,
    pub jobs_by_day: Vec<DayCount>,
    pub status_distribution: Vec<StatusSlice>,
}

/// Computes dashboard statistics, bucketing days in the local time zone.
pub fn compute_stats(jobs: &[Job]) -> DashboardStats {
    compute_stats_in(jobs, &Local)
}

/// Computes dashboard statistics, bucketing days in `tz`.
pub fn compute_stats_in<Tz: TimeZone>(jobs: &[Job], tz: &Tz) -> DashboardStats {
    let completed_jobs = count_status(jobs, |status| status == JobStatus::Completed);
    let failed_jobs = count_status(jobs, |status| status == JobStatus::Failed);
    let processing_jobs = count_status(jobs, JobStatus::is_in_progress);

    let status_distribution = [
        ("Completed", completed_jobs, COMPLETED_COLOR),
        ("Failed", failed_jobs, FAILED_COLOR),
        ("Processing", processing_jobs, PROCESSING_COLOR),
    ]
    .into_iter()
    .filter(|(_, count, _)| *count > 0)
    .map(|(label, count, color)| StatusSlice {
        label,
        count,
        color,
    })
    .collect();

    DashboardStats {
        total_jobs: jobs.len(),
        completed_jobs,
        failed_jobs,
        processing_jobs,
        average_processing_time: average_processing_time(jobs),
        jobs_by_day: jobs_by_day(jobs, tz),
        status_distribution,
    }
}

fn count_status(jobs: &[Job], predicate: impl Fn(JobStatus) -> bool) -> usize {
    jobs.iter().filter(|job| predicate(job.status)).count()
}

fn average_processing_time(jobs: &[Job]) -> u64 {
    let mut total_millis: i64 = 0;
    let mut counted: u32 = 0;

    for job in jobs.iter().filter(|job| job.is_completed()) {
        if job.processing_started_at.is_none() || job.processing_completed_at.is_none() {
            continue;
        }
        match job.processing_interval() {
            Some(elapsed) => {
                total_millis = total_millis.saturating_add(elapsed.num_milliseconds());
                counted += 1;
            }
            None => {
                enhance_debug!(
                    "Skipping job {} in average: unparseable processing timestamps",
                    job.id
                );
            }
        }
    }

    if counted == 0 {
        return 0;
    }
    // Negative intervals count towards the sum; a negative mean reports as 0.
    let mean_secs = total_millis as f64 / 1000.0 / f64::from(counted);
    mean_secs.round().max(0.0) as u64
}

fn jobs_by_day<Tz: TimeZone>(jobs: &[Job], tz: &Tz) -> Vec<DayCount> {
    let mut days: Vec<DayCount> = Vec::new();

    for job in jobs {
        let Some(created) = job.created() else {
            enhance_debug!(
                "Skipping job {} in histogram: bad createdAt {:?}",
                job.id,
                job.created_at
            );
            continue;
        };
        let date = created.with_timezone(tz).date_naive();
        match days.iter_mut().find(|day| day.date == date) {
            Some(day) => day.count += 1,
            None => days.push(DayCount { date, count: 1 }),
        }
    }

    let keep_from = days.len().saturating_sub(HISTOGRAM_DAYS);
    days.split_off(keep_from)
}
