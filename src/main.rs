use anyhow::Result;

use fpl_pulse::cli::Command;
use fpl_pulse::{handle_dashboard, handle_fetch, handle_serve, handle_watch, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Fetch => handle_fetch(),
        Command::Dashboard {
            url,
            count,
            offset,
            section,
        } => handle_dashboard(url, *count, *offset, section.as_deref()),
        Command::Watch { action } => handle_watch(action),
    }
}
