use std::fmt::Write;

use enhance_core::{
    join_url, AiToolsView, AppViewModel, JobDetailView, JobRowView, JobsPanel, LabeledValue,
    LogLevel, OverviewView, Tab,
};

use super::constants::{BAR_WIDTH, FILE_NAME_WIDTH};

pub fn render(view: &AppViewModel, base_url: &str) -> String {
    let mut out = String::new();
    let status = if view.polling { "live" } else { "paused" };
    let _ = writeln!(out, "Processing Dashboard ({status})");
    let _ = writeln!(out, "{}", tab_bar(&view.tabs, view.active_tab));
    let _ = writeln!(out);

    match view.active_tab {
        Tab::Overview => render_overview(&mut out, &view.overview),
        Tab::Jobs => render_jobs(&mut out, &view.jobs_panel),
        Tab::Cache => render_cache(&mut out, base_url),
        Tab::Details => match &view.details {
            Some(details) => render_details(&mut out, details, base_url),
            None => render_jobs(&mut out, &view.jobs_panel),
        },
    }
    out
}

fn tab_bar(tabs: &[Tab], active: Tab) -> String {
    tabs.iter()
        .map(|tab| {
            if *tab == active {
                format!("[{}]", tab.label())
            } else {
                format!(" {} ", tab.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_overview(out: &mut String, overview: &OverviewView) {
    let _ = writeln!(out, "Total Jobs:            {}", overview.total_jobs);
    let _ = writeln!(out, "Completed:             {}", overview.completed_jobs);
    let _ = writeln!(out, "Processing:            {}", overview.processing_jobs);
    let _ = writeln!(
        out,
        "Avg. Processing Time:  {}",
        overview.average_processing_time
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "Processing Activity (videos per day)");
    let max = overview
        .jobs_by_day
        .iter()
        .map(|day| day.count)
        .max()
        .unwrap_or(0);
    if overview.jobs_by_day.is_empty() {
        let _ = writeln!(out, "  no activity");
    }
    for day in &overview.jobs_by_day {
        let _ = writeln!(
            out,
            "  {} {:<width$} {}",
            day.label(),
            bar(day.count, max),
            day.count,
            width = BAR_WIDTH
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Processing Status");
    let total: usize = overview
        .status_distribution
        .iter()
        .map(|slice| slice.count)
        .sum();
    if total == 0 {
        let _ = writeln!(out, "  no jobs");
    }
    for slice in &overview.status_distribution {
        let percent = slice.count as f64 * 100.0 / total as f64;
        let _ = writeln!(
            out,
            "  {:<11} {:>4} {:>4.0}%  {}",
            slice.label, slice.count, percent, slice.color
        );
    }
}

fn bar(count: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let filled = (count * BAR_WIDTH).div_ceil(max);
    "#".repeat(filled)
}

fn render_jobs(out: &mut String, panel: &JobsPanel) {
    match panel {
        JobsPanel::Loading => {
            let _ = writeln!(out, "Loading jobs...");
        }
        JobsPanel::Error(message) => {
            let _ = writeln!(out, "Error: {message}");
        }
        JobsPanel::Empty => {
            let _ = writeln!(out, "No jobs found");
            let _ = writeln!(out, "Upload a video to start enhancing");
        }
        JobsPanel::Table(rows) => {
            let _ = writeln!(
                out,
                "{:<12} {:<name$} {:<12} {:<19} {:>8}  Actions",
                "Job ID",
                "File Name",
                "Status",
                "Created",
                "Progress",
                name = FILE_NAME_WIDTH
            );
            for row in rows {
                let _ = writeln!(out, "{}", format_job_row(row));
            }
        }
    }
}

fn format_job_row(row: &JobRowView) -> String {
    let actions = if row.download_path.is_some() {
        "details, download"
    } else {
        "details"
    };
    format!(
        "{:<12} {:<name$} {:<12} {:<19} {:>8}  {}",
        row.short_id,
        truncate(&row.file_name, FILE_NAME_WIDTH),
        format!("{} ({})", row.status_label, row.badge.name()),
        row.created,
        row.progress,
        actions,
        name = FILE_NAME_WIDTH
    )
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{kept}...")
}

fn render_cache(out: &mut String, base_url: &str) {
    let _ = writeln!(out, "Cache Manager");
    let _ = writeln!(
        out,
        "Cached results are managed by the cache service at {base_url}."
    );
}

fn render_details(out: &mut String, details: &JobDetailView, base_url: &str) {
    let _ = writeln!(out, "Job Details  [{}]", details.status_label);
    let _ = writeln!(out);
    render_section(out, "File Information", &details.file_info);
    render_section(out, "Processing Information", &details.processing_info);
    match &details.enhancement_options {
        Some(options) => render_section(out, "Enhancement Options", options),
        None => {
            let _ = writeln!(out, "Enhancement Options");
            let _ = writeln!(out, "  No enhancement options available");
            let _ = writeln!(out);
        }
    }
    if let Some(video) = &details.video_info {
        render_section(out, "Original Video Info", video);
    }
    if let Some(stream) = &details.stream_path {
        let _ = writeln!(out, "Preview: {}", join_url(base_url, stream));
    }
    if !details.logs.is_empty() {
        let _ = writeln!(out, "Processing Log");
        for line in &details.logs {
            let _ = writeln!(
                out,
                "  [{}] {}{}",
                line.time,
                level_prefix(line.level),
                line.message
            );
        }
        let _ = writeln!(out);
    }
    if let Some(download) = &details.download_path {
        let _ = writeln!(out, "Download: {}", join_url(base_url, download));
    }
    let _ = writeln!(out, "Type 'back' to return to the job list.");
}

fn render_section(out: &mut String, title: &str, rows: &[LabeledValue]) {
    let _ = writeln!(out, "{title}");
    for row in rows {
        let _ = writeln!(out, "  {:<24} {}", format!("{}:", row.label), row.value);
    }
    let _ = writeln!(out);
}

fn level_prefix(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "ERROR ",
        LogLevel::Warning => "WARN ",
        LogLevel::Info | LogLevel::Other => "",
    }
}

pub fn render_ai_tools(view: &AiToolsView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "AI Tools");
    let _ = writeln!(out, "Model: {}", view.selected_model);
    let tabs = view
        .tools
        .iter()
        .map(|(tool, active)| {
            if *active {
                format!("[{}]", tool.label())
            } else {
                format!(" {} ", tool.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(out, "{tabs}");
    let _ = writeln!(
        out,
        "{} runs on the inference service using {}.",
        view.active_tool.label(),
        view.selected_model
    );
    out
}
