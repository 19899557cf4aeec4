use enhance_core::{Msg, Tab};

/// Anything that can wake the dashboard loop.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Input {
    Msg(Msg),
    Help,
    Quit,
    Invalid(String),
}

/// Parses one line typed by the operator. Blank lines yield `None`.
pub(crate) fn parse_command(line: &str) -> Option<Input> {
    let mut words = line.split_whitespace();
    let verb = words.next()?.to_ascii_lowercase();
    let argument = words.next().map(ToOwned::to_owned);

    let input = match (verb.as_str(), argument) {
        ("overview" | "jobs" | "cache", None) => match verb.parse::<Tab>() {
            Ok(tab) => Input::Msg(Msg::TabSelected(tab)),
            Err(err) => Input::Invalid(err),
        },
        ("details", None) => Input::Msg(Msg::TabSelected(Tab::Details)),
        ("details", Some(job_id)) => Input::Msg(Msg::JobDetailsRequested { job_id }),
        ("download", Some(job_id)) => Input::Msg(Msg::DownloadRequested { job_id }),
        ("back", None) => Input::Msg(Msg::BackToJobs),
        ("refresh", None) => Input::Msg(Msg::RefreshRequested),
        ("help" | "?", _) => Input::Help,
        ("quit" | "exit" | "q", _) => Input::Quit,
        (other, _) => Input::Invalid(format!("unrecognized command '{other}'; type 'help'")),
    };
    Some(input)
}
