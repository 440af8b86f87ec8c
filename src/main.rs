// SerTerm - Serial dumb-terminal for the shell
mod cli;
mod core;
mod domain;
mod infrastructure;
mod tui;

use clap::Parser;
use cli::args::{Args, Command, TuiArgs};
use cli::commands::execute_command;
use domain::error::SerTermError;
use infrastructure::config::ConfigManager;
use std::path::Path;
use tui::app::App;

#[tokio::main]
async fn main() -> Result<(), SerTermError> {
    let args = Args::parse();

    match &args.command {
        Some(Command::Tui(tui_args)) => run_terminal(&args, tui_args).await,
        None => run_terminal(&args, &TuiArgs::default()).await,
        _ => match execute_command(args).await {
            Ok(()) => Ok(()),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
    }
}

async fn run_terminal(args: &Args, tui_args: &TuiArgs) -> Result<(), SerTermError> {
    let config_manager = ConfigManager::new()?;
    let mut config = if let Some(config_path) = &args.config {
        config_manager.load_config_from_path(Path::new(config_path))?
    } else {
        config_manager.load_config()?
    };

    tui_args.apply_to(&mut config.port)?;

    // No stderr logger here: the TUI owns the terminal
    let mut app = App::new(config)?;
    app.run().await
}
