use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand};
use enhance_client::{ClientSettings, PollSettings, DEFAULT_BASE_URL};
use enhance_core::ToolTab;

#[derive(Debug, Parser)]
#[command(
    name = "enhance",
    about = "Operator console for the video enhancement service"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(
        long,
        env = "ENHANCE_BASE_URL",
        default_value = DEFAULT_BASE_URL,
        global = true,
        help = "Base URL of the enhancement service"
    )]
    pub base_url: String,

    #[arg(
        long,
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..),
        global = true,
        help = "Seconds between job list refreshes"
    )]
    pub poll_interval_secs: u64,

    #[arg(
        long,
        value_name = "DIR",
        global = true,
        help = "Directory for saved preferences (default: current directory)"
    )]
    pub state_dir: Option<PathBuf>,

    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "Increase log verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    #[arg(long, value_name = "FILE", global = true, help = "Also write logs to FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Processing dashboard: overview, job table, cache and job details.
    Dashboard {
        #[arg(long, value_name = "ID", help = "Open this job's details once loaded")]
        job: Option<String>,
        #[arg(long, help = "Render after the first poll and exit")]
        once: bool,
    },
    /// Details page for a single job.
    Job {
        job_id: String,
        #[arg(long, help = "Render after the first poll and exit")]
        once: bool,
    },
    /// AI tools page: pick the active tool and the model to use.
    AiTools {
        #[arg(long, help = "Select and remember this model")]
        model: Option<String>,
        #[arg(long, help = "Tool tab to open: text, image or audio")]
        tool: Option<ToolTab>,
    },
}

impl Cli {
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            base_url: self.base_url.clone(),
            ..ClientSettings::default()
        }
    }

    pub fn poll_settings(&self) -> PollSettings {
        PollSettings {
            interval: Duration::from_secs(self.poll_interval_secs),
        }
    }

    pub fn state_dir(&self) -> PathBuf {
        self.state_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
