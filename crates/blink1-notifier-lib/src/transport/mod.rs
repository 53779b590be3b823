//! Transports — the two ways a color reaches the blink(1).
//!
//! [`Transport`] is the closed set selected by [`BlinkInterface`]; the
//! [`Blink1Transport`] trait is the seam the notifier dispatches through.

mod commandline;
mod web_api;

use std::fmt;
use std::io::Write;

use crate::config::{BlinkInterface, Config};
use crate::error::Result;
use crate::led::Color;

pub use commandline::{CommandSpec, Commandline, fade_command, test_command};
pub use web_api::{WebApi, fade_url, format_delay, test_url};

/// Something that can put a color on the device.
pub trait Blink1Transport {
    /// Fade the device to `color` over `fade_delay` seconds.
    ///
    /// Output produced by the device tooling is written to `build_log`.
    fn fade_to_rgb(&self, color: Color, fade_delay: f64, build_log: &mut dyn Write)
    -> Result<()>;

    /// Flash a fixed test color. Failures are described, never returned.
    fn test_blink(&self, fade_delay: f64) -> ConnectionReport;
}

/// Outcome of a connectivity test, shown to an administrator as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionReport {
    /// Whether the request or command went out without an I/O error.
    pub sent: bool,
    pub message: String,
}

impl ConnectionReport {
    pub(crate) fn sent(message: String) -> Self {
        ConnectionReport {
            sent: true,
            message,
        }
    }

    pub(crate) fn failed(message: String) -> Self {
        ConnectionReport {
            sent: false,
            message,
        }
    }
}

impl fmt::Display for ConnectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Transport selected by configuration.
#[derive(Debug, Clone)]
pub enum Transport {
    WebApi(WebApi),
    Commandline(Commandline),
}

impl Transport {
    pub fn new(interface: BlinkInterface, url_base: &str, command_path: &str) -> Self {
        match interface {
            BlinkInterface::WebApi => Transport::WebApi(WebApi::new(url_base)),
            BlinkInterface::Commandline => Transport::Commandline(Commandline::new(command_path)),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.blink_interface, &config.url_base, &config.command_path)
    }
}

impl Blink1Transport for Transport {
    fn fade_to_rgb(
        &self,
        color: Color,
        fade_delay: f64,
        build_log: &mut dyn Write,
    ) -> Result<()> {
        match self {
            Transport::WebApi(t) => t.fade_to_rgb(color, fade_delay, build_log),
            Transport::Commandline(t) => t.fade_to_rgb(color, fade_delay, build_log),
        }
    }

    fn test_blink(&self, fade_delay: f64) -> ConnectionReport {
        match self {
            Transport::WebApi(t) => t.test_blink(fade_delay),
            Transport::Commandline(t) => t.test_blink(fade_delay),
        }
    }
}
