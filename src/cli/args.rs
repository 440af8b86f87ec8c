use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};

use crate::domain::config::{DataBits, FlowControl, Parity, PortSettings, StopBits};
use crate::domain::error::{SerTermError, SerTermResult};

/// Command line arguments for SerTerm
#[derive(Parser, Debug)]
#[command(
    name = "serterm",
    version = env!("CARGO_PKG_VERSION"),
    about = "Serial dumb-terminal for the shell",
    long_about = "A serial terminal with a scrollback console: pick a port and its line parameters, connect, and keystrokes are relayed to the port while incoming bytes are displayed."
)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Command to execute; the terminal opens when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the interactive terminal
    Tui(TuiArgs),
    /// List available serial ports
    Ports,
    /// Configuration management commands
    Config(ConfigArgs),
    /// Display version information
    Version,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output
    Json,
    /// Table output
    Table,
    /// CSV output
    Csv,
}

/// Terminal startup overrides
#[derive(ClapArgs, Debug, Default)]
pub struct TuiArgs {
    /// Serial port path
    #[arg(short, long)]
    pub port: Option<String>,

    /// Baud rate
    #[arg(short, long)]
    pub baud: Option<u32>,

    /// Data bits (5, 6, 7, or 8)
    #[arg(long)]
    pub data_bits: Option<u8>,

    /// Stop bits (1 or 2)
    #[arg(long)]
    pub stop_bits: Option<u8>,

    /// Parity (none, even, odd)
    #[arg(long, value_enum)]
    pub parity: Option<ParityArg>,

    /// Flow control (none, hardware, software)
    #[arg(long, value_enum)]
    pub flow_control: Option<FlowControlArg>,
}

/// Configuration management arguments
#[derive(ClapArgs, Debug)]
pub struct ConfigArgs {
    /// Configuration subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Configuration management subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Create a default configuration file
    Init,
}

/// Parity configuration argument
#[derive(ValueEnum, Debug, Clone)]
pub enum ParityArg {
    None,
    Even,
    Odd,
}

/// Flow control configuration argument
#[derive(ValueEnum, Debug, Clone)]
pub enum FlowControlArg {
    None,
    Hardware,
    Software,
}

impl From<ParityArg> for Parity {
    fn from(parity: ParityArg) -> Self {
        match parity {
            ParityArg::None => Self::None,
            ParityArg::Even => Self::Even,
            ParityArg::Odd => Self::Odd,
        }
    }
}

impl From<FlowControlArg> for FlowControl {
    fn from(flow_control: FlowControlArg) -> Self {
        match flow_control {
            FlowControlArg::None => Self::None,
            FlowControlArg::Hardware => Self::Hardware,
            FlowControlArg::Software => Self::Software,
        }
    }
}

impl TuiArgs {
    /// Fold the command line overrides into the configured settings
    pub fn apply_to(&self, settings: &mut PortSettings) -> SerTermResult<()> {
        if let Some(port) = &self.port {
            settings.port_name = port.clone();
        }
        if let Some(baud) = self.baud {
            if baud == 0 {
                return Err(SerTermError::InvalidSetting(
                    "baud rate must be positive".to_string(),
                ));
            }
            settings.baud_rate = baud;
        }
        if let Some(bits) = self.data_bits {
            settings.data_bits = DataBits::from_u8(bits).ok_or_else(|| {
                SerTermError::InvalidSetting(format!("invalid data bits: {}", bits))
            })?;
        }
        if let Some(bits) = self.stop_bits {
            settings.stop_bits = StopBits::from_u8(bits).ok_or_else(|| {
                SerTermError::InvalidSetting(format!("invalid stop bits: {}", bits))
            })?;
        }
        if let Some(parity) = &self.parity {
            settings.parity = parity.clone().into();
        }
        if let Some(flow_control) = &self.flow_control {
            settings.flow_control = flow_control.clone().into();
        }
        Ok(())
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}
