use crate::domain::{config::PortSettings, error::SerTermResult};

/// Byte-level abstraction over a serial link.
///
/// Implementations are expected to be non-blocking: `read_available` returns
/// whatever has arrived so far (possibly nothing) and `write` queues bytes
/// with the driver rather than waiting for the wire.
pub trait Channel: Send {
    /// Open the link with the given line parameters
    fn open(&mut self, settings: &PortSettings) -> SerTermResult<()>;

    /// Queue bytes for transmission
    fn write(&mut self, data: &[u8]) -> SerTermResult<()>;

    /// Drain the bytes that have arrived since the last call
    fn read_available(&mut self) -> SerTermResult<Vec<u8>>;

    /// Push any buffered output onto the wire
    fn flush(&mut self) -> SerTermResult<()>;

    /// Close the link and release the handle
    fn close(&mut self) -> SerTermResult<()>;
}
