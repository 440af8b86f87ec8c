use crate::core::session::{channel::Channel, state::SessionStatus};
use crate::domain::{
    config::{DataBits, FlowControl, Parity, PortSettings, StopBits},
    error::{SerTermError, SerTermResult},
};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Owns one serial session: the line parameters, the connection status, and
/// the channel handle for as long as it is open.
///
/// All operations run on the caller's event loop; the controller holds no
/// locks and spawns no tasks. Incoming bytes are handed to the display sink
/// as unmodified chunks over an unbounded channel.
pub struct SessionController {
    settings: PortSettings,
    status: SessionStatus,
    channel: Box<dyn Channel>,
    display: mpsc::UnboundedSender<Vec<u8>>,
}

impl SessionController {
    pub fn new(
        settings: PortSettings,
        channel: Box<dyn Channel>,
        display: mpsc::UnboundedSender<Vec<u8>>,
    ) -> Self {
        Self {
            settings,
            status: SessionStatus::Disconnected,
            channel,
            display,
        }
    }

    pub fn settings(&self) -> &PortSettings {
        &self.settings
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Select the port to open. Ignored unless disconnected, so an open
    /// channel never drifts from the settings it was opened with.
    pub fn set_port_name(&mut self, name: impl Into<String>) {
        if !self.status.is_disconnected() {
            return;
        }
        self.settings.port_name = name.into();
    }

    /// Set the baud rate. Zero is rejected; any positive rate is stored.
    /// Ignored unless disconnected.
    pub fn set_baud_rate(&mut self, baud_rate: u32) -> SerTermResult<()> {
        if !self.status.is_disconnected() {
            return Ok(());
        }
        if baud_rate == 0 {
            return Err(SerTermError::InvalidSetting(
                "baud rate must be positive".to_string(),
            ));
        }
        self.settings.baud_rate = baud_rate;
        Ok(())
    }

    /// Set the number of data bits. Ignored unless disconnected.
    pub fn set_data_bits(&mut self, data_bits: DataBits) {
        if !self.status.is_disconnected() {
            return;
        }
        self.settings.data_bits = data_bits;
    }

    /// Set the parity mode. Ignored unless disconnected.
    pub fn set_parity(&mut self, parity: Parity) {
        if !self.status.is_disconnected() {
            return;
        }
        self.settings.parity = parity;
    }

    /// Set the number of stop bits. Ignored unless disconnected.
    pub fn set_stop_bits(&mut self, stop_bits: StopBits) {
        if !self.status.is_disconnected() {
            return;
        }
        self.settings.stop_bits = stop_bits;
    }

    /// Set the flow control mode. Ignored unless disconnected.
    pub fn set_flow_control(&mut self, flow_control: FlowControl) {
        if !self.status.is_disconnected() {
            return;
        }
        self.settings.flow_control = flow_control;
    }

    /// Apply the current settings to the channel and open it.
    ///
    /// Requires a selected port; fails without touching the channel
    /// otherwise. On failure the session lands back in Disconnected with the
    /// channel's own error description, and a retry with corrected settings
    /// is always possible.
    pub fn connect(&mut self) -> SerTermResult<()> {
        if self.status.is_connected() {
            return Ok(());
        }
        if self.settings.port_name.is_empty() {
            return Err(SerTermError::PortOpenFailed {
                message: "no port selected".to_string(),
            });
        }

        self.status = SessionStatus::Connecting;
        debug!("Opening {} at {} baud", self.settings.port_name, self.settings.baud_rate);

        match self.channel.open(&self.settings) {
            Ok(()) => {
                self.status = SessionStatus::Connected;
                info!("Connected on {}", self.settings.port_name);
                Ok(())
            }
            Err(e) => {
                self.status = SessionStatus::Disconnected;
                error!("Failed to open {}: {}", self.settings.port_name, e);
                Err(match e {
                    failure @ SerTermError::PortOpenFailed { .. } => failure,
                    other => SerTermError::PortOpenFailed {
                        message: other.to_string(),
                    },
                })
            }
        }
    }

    /// Flush pending output, close the channel, and return to Disconnected.
    /// Calling this while already disconnected is a no-op.
    pub fn disconnect(&mut self) {
        if self.status.is_disconnected() {
            return;
        }

        if let Err(e) = self.channel.flush() {
            warn!("Flush before close failed: {}", e);
        }
        if let Err(e) = self.channel.close() {
            warn!("Failed to close channel: {}", e);
        }

        self.status = SessionStatus::Disconnected;
        info!("Disconnected from {}", self.settings.port_name);
    }

    /// Write bytes to the channel. Valid only while connected.
    pub fn send(&mut self, data: &[u8]) -> SerTermResult<()> {
        if !self.status.is_connected() {
            return Err(SerTermError::NotConnected);
        }
        self.channel.write(data)?;
        debug!("Sent {} bytes", data.len());
        Ok(())
    }

    /// Read whatever bytes the channel has pending and forward them to the
    /// display sink as one chunk. Returns the number of bytes forwarded.
    pub fn drain_incoming(&mut self) -> SerTermResult<usize> {
        if !self.status.is_connected() {
            return Err(SerTermError::NotConnected);
        }

        let data = self.channel.read_available()?;
        if data.is_empty() {
            return Ok(0);
        }

        let count = data.len();
        debug!("Received {} bytes", count);
        if self.display.send(data).is_err() {
            warn!("Display sink dropped, discarding {} bytes", count);
        }
        Ok(count)
    }
}
