use crate::domain::error::SerTermResult;
use serde::Serialize;
use serialport::SerialPortType;
use tabled::Tabled;
use tracing::debug;

/// A serial port discovered on this machine
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct PortInfo {
    /// Platform port name, e.g. `/dev/ttyUSB0` or `COM3`
    #[tabled(rename = "Port")]
    pub name: String,
    /// Hardware kind reported by the driver
    #[tabled(rename = "Type")]
    pub kind: String,
}

/// List the serial ports currently available on this machine.
///
/// An empty list is a valid answer, not an error; the UI disables port
/// selection for the session in that case.
pub fn available_ports() -> SerTermResult<Vec<PortInfo>> {
    let ports = serialport::available_ports()?;
    debug!("Enumerated {} serial ports", ports.len());

    Ok(ports
        .into_iter()
        .map(|port| PortInfo {
            name: port.port_name,
            kind: describe_port_type(&port.port_type),
        })
        .collect())
}

fn describe_port_type(port_type: &SerialPortType) -> String {
    match port_type {
        SerialPortType::UsbPort(info) => match &info.product {
            Some(product) => format!("USB ({})", product),
            None => format!("USB ({:04x}:{:04x})", info.vid, info.pid),
        },
        SerialPortType::BluetoothPort => "Bluetooth".to_string(),
        SerialPortType::PciPort => "PCI".to_string(),
        SerialPortType::Unknown => "Unknown".to_string(),
    }
}
