//! blink1-notifier — build result signalling on blink(1) USB LEDs.

pub mod config;
pub mod error;
pub mod led;
pub mod notifier;
pub mod outcome;
pub mod transport;

pub use error::{NotifierError, Result};
