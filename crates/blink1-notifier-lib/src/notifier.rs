//! Build-completion notifier.
//!
//! Signalling is best-effort: a broken or missing LED never fails a build.
//! [`DeviceNotifier::notify`] and [`DeviceNotifier::on_build_complete`]
//! therefore return nothing; failures go to the build log and the `log`
//! facade, then are dropped.

use std::io::Write;
use std::sync::Arc;

use crate::config::{BlinkInterface, ConfigStore};
use crate::led::{Color, resolve_color};
use crate::outcome::BuildOutcome;
use crate::transport::{Blink1Transport, ConnectionReport, Transport};

/// Send `color` through `transport`, swallowing any failure.
///
/// The error and its cause chain are written to `build_log`.
pub fn dispatch(
    transport: &dyn Blink1Transport,
    color: Color,
    fade_delay: f64,
    build_log: &mut dyn Write,
) {
    let Err(e) = transport.fade_to_rgb(color, fade_delay, build_log) else {
        return;
    };
    log::warn!("blink(1) notification failed: {e}");
    let _ = writeln!(build_log, "blink(1) notification failed: {e}");
    // The first source is the error `e` already displays.
    let mut cause = std::error::Error::source(&e).and_then(|s| s.source());
    while let Some(c) = cause {
        let _ = writeln!(build_log, "  caused by: {c}");
        cause = c.source();
    }
}

/// Delivers colors to the device configured in a [`ConfigStore`].
#[derive(Debug, Clone)]
pub struct DeviceNotifier {
    store: Arc<ConfigStore>,
}

impl DeviceNotifier {
    pub fn new(store: Arc<ConfigStore>) -> Self {
        DeviceNotifier { store }
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Fade the device to `color` using the current configuration.
    pub fn notify(&self, color: Color, build_log: &mut dyn Write) {
        let config = self.store.snapshot();
        let transport = Transport::from_config(&config);
        dispatch(&transport, color, config.fade_delay_seconds, build_log);
    }

    /// Signal the color for a finished build.
    ///
    /// Color policy and transport come from the same config snapshot.
    pub fn on_build_complete(&self, outcome: BuildOutcome, build_log: &mut dyn Write) {
        let config = self.store.snapshot();
        let color = resolve_color(outcome, config.success_color);
        log::info!(
            "build {outcome}: signalling {color} via {}",
            config.blink_interface
        );
        let transport = Transport::from_config(&config);
        dispatch(&transport, color, config.fade_delay_seconds, build_log);
    }

    /// Try candidate settings without saving them.
    ///
    /// The fade delay comes from the stored configuration. The result is
    /// informational whether or not the device was reached.
    pub fn test_connection(
        &self,
        interface: BlinkInterface,
        url_base: &str,
        command_path: &str,
    ) -> ConnectionReport {
        let fade_delay = self.store.snapshot().fade_delay_seconds;
        Transport::new(interface, url_base, command_path).test_blink(fade_delay)
    }
}
