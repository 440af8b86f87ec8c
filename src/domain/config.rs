use serde::{Deserialize, Serialize};

/// Baud rates offered by the settings menu. Any positive rate is accepted
/// from the command line or a config file.
pub const STANDARD_BAUD_RATES: [u32; 8] =
    [1200, 2400, 4800, 9600, 19200, 38400, 57600, 115200];

/// SerTerm configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerTermConfig {
    /// Global configuration
    #[serde(default)]
    pub global: GlobalConfig,
    /// Line parameters used when the session starts
    #[serde(default)]
    pub port: PortSettings,
}

/// Global configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Default log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Console scrollback cap in lines
    #[serde(default = "default_scrollback_lines")]
    pub scrollback_lines: usize,
    /// Serial poll interval in milliseconds
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,
}

/// Line parameters for one serial connection.
///
/// An open channel never observes a settings change; the session controller
/// only applies mutations while disconnected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortSettings {
    /// Port name, empty until one is selected
    #[serde(default)]
    pub port_name: String,
    #[serde(default = "default_baud_rate")]
    pub baud_rate: u32,
    #[serde(default)]
    pub data_bits: DataBits,
    #[serde(default)]
    pub parity: Parity,
    #[serde(default)]
    pub stop_bits: StopBits,
    #[serde(default)]
    pub flow_control: FlowControl,
}

/// Number of data bits per character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataBits {
    Five,
    Six,
    Seven,
    Eight,
}

/// Parity checking mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopBits {
    One,
    Two,
}

/// Flow control mode on the physical link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowControl {
    None,
    Hardware,
    Software,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_scrollback_lines() -> usize {
    100
}

fn default_poll_interval() -> u64 {
    20
}

fn default_baud_rate() -> u32 {
    2400
}

impl Default for SerTermConfig {
    fn default() -> Self {
        Self {
            global: GlobalConfig::default(),
            port: PortSettings::default(),
        }
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            scrollback_lines: default_scrollback_lines(),
            poll_interval_ms: default_poll_interval(),
        }
    }
}

impl Default for PortSettings {
    fn default() -> Self {
        Self {
            port_name: String::new(),
            baud_rate: default_baud_rate(),
            data_bits: DataBits::default(),
            parity: Parity::default(),
            stop_bits: StopBits::default(),
            flow_control: FlowControl::default(),
        }
    }
}

impl Default for DataBits {
    fn default() -> Self {
        DataBits::Eight
    }
}

impl Default for Parity {
    fn default() -> Self {
        Parity::None
    }
}

impl Default for StopBits {
    fn default() -> Self {
        StopBits::One
    }
}

impl Default for FlowControl {
    fn default() -> Self {
        FlowControl::Hardware
    }
}

impl DataBits {
    pub fn as_u8(self) -> u8 {
        match self {
            DataBits::Five => 5,
            DataBits::Six => 6,
            DataBits::Seven => 7,
            DataBits::Eight => 8,
        }
    }

    pub fn from_u8(bits: u8) -> Option<Self> {
        match bits {
            5 => Some(DataBits::Five),
            6 => Some(DataBits::Six),
            7 => Some(DataBits::Seven),
            8 => Some(DataBits::Eight),
            _ => None,
        }
    }
}

impl StopBits {
    pub fn as_u8(self) -> u8 {
        match self {
            StopBits::One => 1,
            StopBits::Two => 2,
        }
    }

    pub fn from_u8(bits: u8) -> Option<Self> {
        match bits {
            1 => Some(StopBits::One),
            2 => Some(StopBits::Two),
            _ => None,
        }
    }
}

impl std::fmt::Display for DataBits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

impl std::fmt::Display for Parity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Parity::None => write!(f, "None"),
            Parity::Even => write!(f, "Even"),
            Parity::Odd => write!(f, "Odd"),
        }
    }
}

impl std::fmt::Display for StopBits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

impl std::fmt::Display for FlowControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlowControl::None => write!(f, "None"),
            FlowControl::Hardware => write!(f, "Hardware"),
            FlowControl::Software => write!(f, "Software"),
        }
    }
}
