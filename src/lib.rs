//! SerTerm Library
//!
//! Serial dumb-terminal building blocks: a port session controller over a
//! byte-channel abstraction, a serialport-backed channel, and the TUI that
//! relays keystrokes out and renders incoming bytes in a scrollback console.

pub mod cli;
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod tui;

pub use crate::core::session::{Channel, SessionController, SessionStatus};
pub use crate::domain::config::{
    DataBits, FlowControl, Parity, PortSettings, SerTermConfig, StopBits,
};
pub use crate::domain::error::{SerTermError, SerTermResult};
