use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned to a job by the processing backend.
pub type JobId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Uploaded,
    Queued,
    Processing,
    Completed,
    Failed,
    /// Any status string this console does not know about.
    #[serde(other)]
    Unknown,
}

impl JobStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Uploaded => "uploaded",
            JobStatus::Queued => "queued",
            JobStatus::Processing => "processing",
            JobStatus::Completed => "completed",
            JobStatus::Failed => "failed",
            JobStatus::Unknown => "unknown",
        }
    }

    /// Queued and processing jobs share the "in progress" bucket.
    pub fn is_in_progress(self) -> bool {
        matches!(self, JobStatus::Processing | JobStatus::Queued)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancementOptions {
    #[serde(default)]
    pub resolution: String,
    #[serde(default)]
    pub quality: f64,
    #[serde(default)]
    pub auto_color: bool,
    #[serde(default)]
    pub denoise: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stabilize: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhance_details: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdr_effect: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoInfo {
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    /// Source duration in seconds.
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub codec_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warning,
    Error,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

/// A job record as reported by `GET /api/jobs`.
///
/// Timestamps are kept verbatim; use the accessor methods to get parsed
/// values. A timestamp that does not parse is reported as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub original_filename: String,
    #[serde(default)]
    pub file_type: String,
    #[serde(default)]
    pub file_size: u64,
    pub status: JobStatus,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_started_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_completed_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhancement_options: Option<EnhancementOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_info: Option<VideoInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logs: Option<Vec<LogEntry>>,
}

impl Job {
    pub fn created(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }

    pub fn processing_started(&self) -> Option<DateTime<Utc>> {
        self.processing_started_at.as_deref().and_then(parse_timestamp)
    }

    pub fn processing_completed(&self) -> Option<DateTime<Utc>> {
        self.processing_completed_at
            .as_deref()
            .and_then(parse_timestamp)
    }

    /// Signed `completed - started`, when both timestamps parse.
    pub fn processing_interval(&self) -> Option<TimeDelta> {
        Some(self.processing_completed()? - self.processing_started()?)
    }

    /// Wall-clock processing time, when both ends are known and ordered.
    pub fn processing_duration(&self) -> Option<TimeDelta> {
        self.processing_interval()
            .filter(|elapsed| *elapsed >= TimeDelta::zero())
    }

    pub fn is_completed(&self) -> bool {
        self.status == JobStatus::Completed
    }
}

/// Parses the timestamp shapes the backend emits.
///
/// RFC 3339 is tried first. Date-times without an offset are local time;
/// bare dates are midnight UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|local| local.with_timezone(&Utc));
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
