use crate::core::session::Channel;
use crate::domain::{
    config::{DataBits, FlowControl, Parity, PortSettings, StopBits},
    error::{SerTermError, SerTermResult},
};
use serialport::SerialPort;
use std::io::{Read, Write};
use std::time::Duration;
use tracing::{debug, info};

impl From<DataBits> for serialport::DataBits {
    fn from(bits: DataBits) -> Self {
        match bits {
            DataBits::Five => serialport::DataBits::Five,
            DataBits::Six => serialport::DataBits::Six,
            DataBits::Seven => serialport::DataBits::Seven,
            DataBits::Eight => serialport::DataBits::Eight,
        }
    }
}

impl From<Parity> for serialport::Parity {
    fn from(parity: Parity) -> Self {
        match parity {
            Parity::None => serialport::Parity::None,
            Parity::Even => serialport::Parity::Even,
            Parity::Odd => serialport::Parity::Odd,
        }
    }
}

impl From<StopBits> for serialport::StopBits {
    fn from(bits: StopBits) -> Self {
        match bits {
            StopBits::One => serialport::StopBits::One,
            StopBits::Two => serialport::StopBits::Two,
        }
    }
}

impl From<FlowControl> for serialport::FlowControl {
    fn from(flow: FlowControl) -> Self {
        match flow {
            FlowControl::None => serialport::FlowControl::None,
            FlowControl::Hardware => serialport::FlowControl::Hardware,
            FlowControl::Software => serialport::FlowControl::Software,
        }
    }
}

/// `Channel` implementation over a platform serial port.
///
/// Reads never block: `read_available` asks the driver how many bytes are
/// pending and takes exactly those.
pub struct SerialPortChannel {
    port: Option<Box<dyn SerialPort>>,
}

impl SerialPortChannel {
    pub fn new() -> Self {
        Self { port: None }
    }
}

impl Default for SerialPortChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl Channel for SerialPortChannel {
    fn open(&mut self, settings: &PortSettings) -> SerTermResult<()> {
        let builder = serialport::new(&settings.port_name, settings.baud_rate)
            .data_bits(settings.data_bits.into())
            .parity(settings.parity.into())
            .stop_bits(settings.stop_bits.into())
            .flow_control(settings.flow_control.into())
            .timeout(Duration::from_millis(10));

        let port = builder.open().map_err(|e| SerTermError::PortOpenFailed {
            message: e.to_string(),
        })?;

        info!(
            "Serial port {} opened: {} baud, {}-{}-{}, {} flow control",
            settings.port_name,
            settings.baud_rate,
            settings.data_bits,
            settings.parity,
            settings.stop_bits,
            settings.flow_control
        );
        self.port = Some(port);
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> SerTermResult<()> {
        let port = self.port.as_mut().ok_or(SerTermError::NotConnected)?;
        port.write_all(data)?;
        Ok(())
    }

    fn read_available(&mut self) -> SerTermResult<Vec<u8>> {
        let port = self.port.as_mut().ok_or(SerTermError::NotConnected)?;

        let pending = port.bytes_to_read()? as usize;
        if pending == 0 {
            return Ok(Vec::new());
        }

        let mut buffer = vec![0u8; pending];
        match port.read(&mut buffer) {
            Ok(n) => {
                buffer.truncate(n);
                debug!("Read {} bytes from serial port", n);
                Ok(buffer)
            }
            // The driver raced us to an empty buffer; nothing arrived
            Err(ref e) if e.kind() == std::io::ErrorKind::TimedOut => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn flush(&mut self) -> SerTermResult<()> {
        let port = self.port.as_mut().ok_or(SerTermError::NotConnected)?;
        port.flush()?;
        Ok(())
    }

    fn close(&mut self) -> SerTermResult<()> {
        if self.port.take().is_some() {
            info!("Serial port closed");
        }
        Ok(())
    }
}
