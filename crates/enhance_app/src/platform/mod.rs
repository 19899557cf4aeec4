mod app;
mod commands;
mod effects;
mod logging;
mod persistence;
mod ui;

use anyhow::Result;

use crate::cli::{Cli, Command};

pub fn run(cli: Cli) -> Result<()> {
    logging::initialize(logging::LogOptions::from_cli(&cli));

    match &cli.command {
        Command::Dashboard { job, once } => app::run_dashboard(&cli, job.clone(), *once),
        Command::Job { job_id, once } => app::run_dashboard(&cli, Some(job_id.clone()), *once),
        Command::AiTools { model, tool } => app::run_ai_tools(&cli, model.clone(), *tool),
    }
}
