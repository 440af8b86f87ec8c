// Session module - Port session controller and channel abstraction
pub mod channel;
pub mod controller;
pub mod state;

pub use channel::Channel;
pub use controller::SessionController;
pub use state::SessionStatus;
