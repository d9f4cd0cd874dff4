//! Dialog layer: command parsing, per-user sessions, the sequencer handler,
//! rendering, and the rates-view handler.

pub mod command;
pub mod handler;
pub mod rates_handler;
pub mod render;
pub mod session;

pub use command::Command;
pub use handler::DialogHandler;
pub use rates_handler::RatesHandler;
pub use session::{DialogState, Session, SessionStore};
