use std::sync::{mpsc, Arc};
use std::time::Duration;

use anyhow::{Context, Result};
use enhance_client::{
    ClientEvent, ClientSettings, EventSink, JobsFetcher, PollSettings, Poller,
    ReqwestJobsFetcher, StateDir,
};
use enhance_core::{join_url, Effect, Msg};
use enhance_logging::{enhance_error, enhance_info, enhance_warn};

use super::commands::Input;
use super::persistence;

/// Forwards poller events into the dashboard loop as messages.
struct MsgSink {
    tx: mpsc::Sender<Input>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: ClientEvent) {
        let msg = match event {
            ClientEvent::PollStarted { generation } => Msg::PollStarted { generation },
            ClientEvent::JobsFetched { generation, jobs } => Msg::JobsLoaded { generation, jobs },
            ClientEvent::FetchFailed { generation, error } => {
                enhance_warn!("Poll {} failed: {}", generation, error);
                Msg::JobsFailed {
                    generation,
                    message: error.banner(),
                }
            }
        };
        let _ = self.tx.send(Input::Msg(msg));
    }
}

pub struct EffectRunner {
    base_url: String,
    fetcher: Arc<dyn JobsFetcher>,
    state_dir: StateDir,
    input_tx: mpsc::Sender<Input>,
    poller: Option<Poller>,
}

impl EffectRunner {
    pub(crate) fn new(
        settings: &ClientSettings,
        state_dir: StateDir,
        input_tx: mpsc::Sender<Input>,
    ) -> Result<Self> {
        let fetcher = ReqwestJobsFetcher::new(settings)
            .with_context(|| format!("invalid service URL '{}'", settings.base_url))?;
        enhance_info!("Polling {}", fetcher.jobs_url());
        Ok(Self {
            base_url: settings.base_url.clone(),
            fetcher: Arc::new(fetcher),
            state_dir,
            input_tx,
            poller: None,
        })
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartPolling { interval } => self.start_polling(interval),
                Effect::StopPolling => {
                    if let Some(mut poller) = self.poller.take() {
                        poller.stop();
                    }
                }
                Effect::RefreshNow => match &self.poller {
                    Some(poller) => poller.refresh(),
                    None => enhance_warn!("Refresh requested while not polling"),
                },
                Effect::OpenDownload { path } => {
                    println!("Download: {}", join_url(&self.base_url, &path));
                }
                Effect::PersistSelectedModel { model } => {
                    persistence::save_selected_model(&self.state_dir, &model);
                }
            }
        }
    }

    fn start_polling(&mut self, interval: Duration) {
        if self.poller.is_some() {
            return;
        }
        let settings = PollSettings { interval };
        let sink = Arc::new(MsgSink {
            tx: self.input_tx.clone(),
        });
        match Poller::start(self.fetcher.clone(), settings, sink) {
            Ok(poller) => self.poller = Some(poller),
            Err(err) => {
                enhance_error!("Could not start job poller: {}", err);
                let _ = self.input_tx.send(Input::Msg(Msg::JobsFailed {
                    generation: 0,
                    message: format!("Failed to fetch jobs: {err}"),
                }));
            }
        }
    }
}
