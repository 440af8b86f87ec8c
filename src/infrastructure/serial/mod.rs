// Serial module - serialport-backed channel and port discovery
pub mod channel;
pub mod ports;

pub use channel::SerialPortChannel;
pub use ports::{available_ports, PortInfo};
