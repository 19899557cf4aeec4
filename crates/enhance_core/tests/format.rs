use enhance_core::{
    badge_color, enabled_label, format_file_size, format_progress, format_time, format_timestamp,
    short_job_id, status_label, BadgeColor, JobStatus, INVALID_DATE,
};

#[test]
fn file_sizes_switch_units_at_kib_and_mib() {
    let cases = [
        (0, "0 B"),
        (1023, "1023 B"),
        (1024, "1.00 KB"),
        (1536, "1.50 KB"),
        (1_048_575, "1024.00 KB"),
        (1_048_576, "1.00 MB"),
        (5 * 1_048_576 + 524_288, "5.50 MB"),
    ];
    for (bytes, expected) in cases {
        assert_eq!(format_file_size(bytes), expected, "bytes={bytes}");
    }
}

#[test]
fn durations_switch_units_at_minute_and_hour() {
    let cases = [
        (0, "0 seconds"),
        (45, "45 seconds"),
        (59, "59 seconds"),
        (60, "1 min 0 sec"),
        (125, "2 min 5 sec"),
        (3599, "59 min 59 sec"),
        (3600, "1 hr 0 min"),
        (3725, "1 hr 2 min"),
    ];
    for (seconds, expected) in cases {
        assert_eq!(format_time(seconds), expected, "seconds={seconds}");
    }
}

#[test]
fn badges_follow_status() {
    assert_eq!(badge_color(JobStatus::Uploaded), BadgeColor::Yellow);
    assert_eq!(badge_color(JobStatus::Queued), BadgeColor::Yellow);
    assert_eq!(badge_color(JobStatus::Processing), BadgeColor::Blue);
    assert_eq!(badge_color(JobStatus::Completed), BadgeColor::Green);
    assert_eq!(badge_color(JobStatus::Failed), BadgeColor::Red);
    assert_eq!(badge_color(JobStatus::Unknown), BadgeColor::Gray);
    assert_eq!(status_label(JobStatus::Processing), "Processing");
}

#[test]
fn table_cells() {
    assert_eq!(short_job_id("0123456789abcdef"), "01234567...");
    assert_eq!(short_job_id("abc"), "abc...");
    assert_eq!(format_progress(Some(42.0)), "42%");
    assert_eq!(format_progress(Some(12.5)), "12.5%");
    assert_eq!(format_progress(None), "-");
    assert_eq!(enabled_label(true), "Enabled");
    assert_eq!(enabled_label(false), "Disabled");
}

#[test]
fn unparseable_timestamps_render_invalid_date() {
    assert_eq!(format_timestamp("soon"), INVALID_DATE);
    assert_ne!(format_timestamp("2024-05-01T09:00:00Z"), INVALID_DATE);
}
