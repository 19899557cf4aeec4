mod cli;
mod platform;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();
    if let Err(error) = platform::run(cli) {
        enhance_logging::enhance_error!("{error:#}");
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}
