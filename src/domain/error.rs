use thiserror::Error;

/// SerTerm unified error type
#[derive(Error, Debug)]
pub enum SerTermError {
    #[error("Failed to open port: {message}")]
    PortOpenFailed { message: String },

    #[error("Port is not connected")]
    NotConnected,

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("Serial port error: {0}")]
    Serial(#[from] serialport::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SerTermResult<T> = Result<T, SerTermError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_failure_carries_message() {
        let error = SerTermError::PortOpenFailed {
            message: "access denied".to_string(),
        };
        assert!(error.to_string().contains("access denied"));
    }

    #[test]
    fn test_not_connected_display() {
        assert_eq!(
            SerTermError::NotConnected.to_string(),
            "Port is not connected"
        );
    }
}
