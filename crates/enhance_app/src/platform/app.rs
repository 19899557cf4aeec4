use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use anyhow::Result;
use enhance_client::StateDir;
use enhance_core::{update, AiModelId, AppState, Effect, Msg, ToolTab};
use enhance_logging::{enhance_debug, enhance_info};

use super::commands::{parse_command, Input};
use super::effects::EffectRunner;
use super::persistence;
use super::ui::constants::{HELP_TEXT, RENDER_TICK};
use super::ui::render;
use crate::cli::Cli;

pub fn run_dashboard(cli: &Cli, job: Option<String>, once: bool) -> Result<()> {
    let (input_tx, input_rx) = mpsc::channel::<Input>();
    let mut runner = EffectRunner::new(
        &cli.client_settings(),
        StateDir::new(cli.state_dir()),
        input_tx.clone(),
    )?;
    let mut dashboard = Dashboard {
        state: AppState::new().with_poll_interval(cli.poll_settings().interval),
        base_url: cli.base_url.clone(),
    };

    if !once {
        spawn_stdin_reader(input_tx.clone());
        println!("{HELP_TEXT}");
    }

    // Background tick to throttle rendering.
    thread::spawn(move || {
        while input_tx.send(Input::Msg(Msg::Tick)).is_ok() {
            thread::sleep(RENDER_TICK);
        }
    });

    dashboard.dispatch(&mut runner, Msg::Mounted);
    if let Some(job_id) = job {
        dashboard.dispatch(&mut runner, Msg::JobRequested { job_id });
    }

    while let Ok(input) = input_rx.recv() {
        match input {
            Input::Msg(Msg::Tick) => {
                dashboard.dispatch(&mut runner, Msg::Tick);
                if dashboard.state.consume_dirty() && !once {
                    dashboard.render();
                }
            }
            Input::Msg(msg) => {
                let settled = matches!(msg, Msg::JobsLoaded { .. } | Msg::JobsFailed { .. });
                dashboard.dispatch(&mut runner, msg);
                if once && settled && !dashboard.state.is_loading() {
                    dashboard.render();
                    break;
                }
            }
            Input::Help => println!("{HELP_TEXT}"),
            Input::Invalid(reason) => eprintln!("{reason}"),
            Input::Quit => break,
        }
    }

    dashboard.dispatch(&mut runner, Msg::Unmounted);
    enhance_info!("Dashboard closed");
    Ok(())
}

pub fn run_ai_tools(cli: &Cli, model: Option<String>, tool: Option<ToolTab>) -> Result<()> {
    let state_dir = StateDir::new(cli.state_dir());
    let mut state = AppState::new();

    if let Some(saved) = persistence::load_selected_model(&state_dir) {
        state = update(state, Msg::RestoreSelectedModel(saved)).0;
    }
    if let Some(tool) = tool {
        state = update(state, Msg::ToolTabSelected(tool)).0;
    }
    if let Some(model) = model {
        let (next, effects) = update(state, Msg::ModelSelected(AiModelId::new(model)));
        state = next;
        for effect in effects {
            if let Effect::PersistSelectedModel { model } = effect {
                persistence::save_selected_model(&state_dir, &model);
            }
        }
    }

    print!("{}", render::render_ai_tools(&state.ai_tools().view()));
    Ok(())
}

struct Dashboard {
    state: AppState,
    base_url: String,
}

impl Dashboard {
    fn dispatch(&mut self, runner: &mut EffectRunner, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        runner.run(effects);
    }

    fn render(&self) {
        println!("{}", render::render(&self.state.view(), &self.base_url));
    }
}

fn spawn_stdin_reader(tx: mpsc::Sender<Input>) {
    thread::spawn(move || {
        read_commands(io::stdin().lock(), &tx);
        enhance_debug!("stdin closed");
    });
}

/// Forwards parsed commands until `quit`. End of input counts as `quit`.
fn read_commands(reader: impl BufRead, tx: &mpsc::Sender<Input>) {
    for line in reader.lines() {
        let Ok(line) = line else { break };
        if let Some(input) = parse_command(&line) {
            let quit = input == Input::Quit;
            if tx.send(input).is_err() || quit {
                return;
            }
        }
    }
    let _ = tx.send(Input::Quit);
}

#[cfg(test)]
mod tests {
    use super::*;
    use enhance_core::Tab;
    use std::io::Cursor;

    fn collect(text: &str) -> Vec<Input> {
        let (tx, rx) = mpsc::channel();
        read_commands(Cursor::new(text.to_string()), &tx);
        drop(tx);
        rx.iter().collect()
    }

    #[test]
    fn end_of_input_quits() {
        assert_eq!(
            collect("jobs\n\n"),
            vec![Input::Msg(Msg::TabSelected(Tab::Jobs)), Input::Quit]
        );
        assert_eq!(collect(""), vec![Input::Quit]);
    }

    #[test]
    fn quit_stops_reading() {
        assert_eq!(collect("quit\ncache\n"), vec![Input::Quit]);
    }
}
