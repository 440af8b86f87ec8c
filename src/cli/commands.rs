use crate::cli::args::{Args, Command, ConfigCommand};
use crate::cli::output::{ConsoleWriter, OutputWriter};
use crate::domain::error::SerTermError;
use crate::infrastructure::config::ConfigManager;
use crate::infrastructure::logging::init_logging;
use crate::infrastructure::serial::available_ports;
use std::path::Path;

/// Execute CLI command
pub async fn execute_command(args: Args) -> Result<(), SerTermError> {
    let writer = ConsoleWriter::new(args.output.clone());

    // Load configuration using ConfigManager
    let config_manager = ConfigManager::new()?;
    let config = if let Some(config_path) = &args.config {
        config_manager.load_config_from_path(Path::new(config_path))?
    } else {
        config_manager.load_config()?
    };

    // Initialize logging
    if !args.quiet {
        let level = if args.verbose {
            "debug"
        } else {
            config.global.log_level.as_str()
        };
        init_logging(level).map_err(|e| SerTermError::Config {
            message: format!("Failed to initialize logging: {}", e),
        })?;
    }

    match args.command {
        Some(Command::Ports) => {
            let ports = available_ports()?;
            writer.write_ports(&ports)?;
            Ok(())
        }
        Some(Command::Config(config_args)) => match config_args.command {
            ConfigCommand::Show => {
                writer.write_config(&config)?;
                Ok(())
            }
            ConfigCommand::Init => {
                let path = config_manager.init_global_config()?;
                writer.write_message(&format!("Wrote default configuration to {}", path.display()))?;
                Ok(())
            }
        },
        Some(Command::Version) => {
            writer.write_message(&format!("serterm {}", env!("CARGO_PKG_VERSION")))?;
            Ok(())
        }
        // The terminal itself is launched from main, not here
        Some(Command::Tui(_)) | None => Ok(()),
    }
}
