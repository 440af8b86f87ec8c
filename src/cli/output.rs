use crate::cli::args::OutputFormat;
use crate::domain::config::SerTermConfig;
use crate::infrastructure::serial::PortInfo;
use std::io;
use tabled::Table;

/// Output writer trait for different formats
pub trait OutputWriter {
    fn write_ports(&self, ports: &[PortInfo]) -> Result<(), OutputError>;
    fn write_config(&self, config: &SerTermConfig) -> Result<(), OutputError>;
    fn write_message(&self, message: &str) -> Result<(), OutputError>;
    fn write_error(&self, error: &str) -> Result<(), OutputError>;
}

/// Output formatting errors
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("TOML serialization error: {0}")]
    TomlError(#[from] toml::ser::Error),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl From<OutputError> for crate::domain::error::SerTermError {
    fn from(err: OutputError) -> Self {
        Self::Output(err.to_string())
    }
}

/// Console output writer
pub struct ConsoleWriter {
    format: OutputFormat,
}

impl ConsoleWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl OutputWriter for ConsoleWriter {
    fn write_ports(&self, ports: &[PortInfo]) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Text => {
                if ports.is_empty() {
                    println!("No serial ports detected");
                } else {
                    println!("Available serial ports:");
                    for port in ports {
                        println!("  {} ({})", port.name, port.kind);
                    }
                }
            }
            OutputFormat::Json => {
                let output = serde_json::to_string_pretty(ports)?;
                println!("{}", output);
            }
            OutputFormat::Table => {
                if !ports.is_empty() {
                    let table = Table::new(ports.to_vec());
                    println!("{}", table);
                }
            }
            OutputFormat::Csv => {
                println!("name,type");
                for port in ports {
                    println!("{},{}", port.name, port.kind);
                }
            }
        }
        Ok(())
    }

    fn write_config(&self, config: &SerTermConfig) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Json => {
                let output = serde_json::to_string_pretty(config)?;
                println!("{}", output);
            }
            // Configuration lives in TOML, so text and table show it as such
            _ => {
                let output = toml::to_string_pretty(config)?;
                println!("{}", output);
            }
        }
        Ok(())
    }

    fn write_message(&self, message: &str) -> Result<(), OutputError> {
        println!("{}", message);
        Ok(())
    }

    fn write_error(&self, error: &str) -> Result<(), OutputError> {
        eprintln!("Error: {}", error);
        Ok(())
    }
}
