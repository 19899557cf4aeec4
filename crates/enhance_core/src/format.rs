//! Presentation helpers shared by every front end.

use chrono::Local;

use crate::job::{parse_timestamp, JobStatus};

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

pub const INVALID_DATE: &str = "Invalid Date";

/// Renders a duration in the coarse units the dashboard uses.
pub fn format_time(seconds: u64) -> String {
    if seconds < 60 {
        format!("{seconds} seconds")
    } else if seconds < 3600 {
        format!("{} min {} sec", seconds / 60, seconds % 60)
    } else {
        format!("{} hr {} min", seconds / 3600, (seconds % 3600) / 60)
    }
}

/// Like [`format_time`] for fractional or possibly invalid inputs.
pub fn format_duration_secs(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return format_time(0);
    }
    format_time(seconds.round() as u64)
}

pub fn format_file_size(bytes: u64) -> String {
    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{:.2} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.2} MB", bytes as f64 / MIB as f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Yellow,
    Blue,
    Green,
    Red,
    Gray,
}

impl BadgeColor {
    pub fn name(self) -> &'static str {
        match self {
            BadgeColor::Yellow => "yellow",
            BadgeColor::Blue => "blue",
            BadgeColor::Green => "green",
            BadgeColor::Red => "red",
            BadgeColor::Gray => "gray",
        }
    }
}

pub fn badge_color(status: JobStatus) -> BadgeColor {
    match status {
        JobStatus::Uploaded | JobStatus::Queued => BadgeColor::Yellow,
        JobStatus::Processing => BadgeColor::Blue,
        JobStatus::Completed => BadgeColor::Green,
        JobStatus::Failed => BadgeColor::Red,
        JobStatus::Unknown => BadgeColor::Gray,
    }
}

/// Capitalized status text for badges.
pub fn status_label(status: JobStatus) -> String {
    capitalize(status.as_str())
}

pub fn short_job_id(id: &str) -> String {
    let prefix: String = id.chars().take(8).collect();
    format!("{prefix}...")
}

pub fn format_progress(progress: Option<f64>) -> String {
    match progress {
        Some(percent) => format!("{percent}%"),
        None => "-".to_string(),
    }
}

pub fn enabled_label(enabled: bool) -> &'static str {
    if enabled {
        "Enabled"
    } else {
        "Disabled"
    }
}

/// Local date and time, or [`INVALID_DATE`].
pub fn format_timestamp(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(ts) => ts
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Local time of day, or [`INVALID_DATE`].
pub fn format_time_of_day(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(ts) => ts.with_timezone(&Local).format("%H:%M:%S").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_handles_empty() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("queued"), "Queued");
    }

    #[test]
    fn fractional_durations_round() {
        assert_eq!(format_duration_secs(59.6), "1 min 0 sec");
        assert_eq!(format_duration_secs(f64::NAN), "0 seconds");
        assert_eq!(format_duration_secs(-3.0), "0 seconds");
    }
}
