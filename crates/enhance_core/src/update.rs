use enhance_logging::{enhance_debug, enhance_info, enhance_warn};

use crate::routes::job_download_path;
use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted => {
            if state.start_polling() {
                vec![Effect::StartPolling {
                    interval: state.poll_interval(),
                }]
            } else {
                Vec::new()
            }
        }
        Msg::Unmounted => {
            if state.stop_polling() {
                vec![Effect::StopPolling]
            } else {
                Vec::new()
            }
        }
        Msg::PollStarted { generation } => {
            state.begin_poll(generation);
            Vec::new()
        }
        Msg::JobsLoaded { generation, jobs } => {
            if state.is_stale(generation) {
                enhance_debug!(
                    "Dropping stale job list generation={} latest={}",
                    generation,
                    state.latest_generation()
                );
            } else {
                enhance_info!("Loaded {} jobs (generation {})", jobs.len(), generation);
                state.note_generation(generation);
                state.replace_jobs(jobs);
            }
            Vec::new()
        }
        Msg::JobsFailed {
            generation,
            message,
        } => {
            if state.is_stale(generation) {
                enhance_debug!("Dropping stale failure generation={}", generation);
            } else {
                enhance_warn!("Job poll {} failed: {}", generation, message);
                state.note_generation(generation);
                state.fail_poll(message);
            }
            Vec::new()
        }
        Msg::TabSelected(tab) => {
            state.select_tab(tab);
            Vec::new()
        }
        Msg::JobDetailsRequested { job_id } => {
            if !state.open_details(&job_id) {
                enhance_debug!("No job matches '{}'", job_id);
            }
            Vec::new()
        }
        Msg::JobRequested { job_id } => {
            state.request_job(job_id);
            Vec::new()
        }
        Msg::BackToJobs => {
            state.back_to_jobs();
            Vec::new()
        }
        Msg::RefreshRequested => vec![Effect::RefreshNow],
        Msg::DownloadRequested { job_id } => match state.find_job(&job_id) {
            Some(job) if job.is_completed() => vec![Effect::OpenDownload {
                path: job_download_path(&job.id),
            }],
            Some(job) => {
                enhance_debug!("Job {} is {}, nothing to download", job.id, job.status.as_str());
                Vec::new()
            }
            None => Vec::new(),
        },
        Msg::ToolTabSelected(tool) => {
            state.select_tool(tool);
            Vec::new()
        }
        Msg::ModelSelected(model) => {
            if state.set_model(model.clone()) {
                vec![Effect::PersistSelectedModel { model }]
            } else {
                Vec::new()
            }
        }
        Msg::RestoreSelectedModel(model) => {
            state.set_model(model);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
