//! `notify` / `set` subcommands — put a color on the device.
//!
//! Device tool output is streamed to stdout, which is the build log when run
//! as a post-build step.

use std::path::Path;

use super::{BuildOutcome, Color, DeviceNotifier, Result, load_store};

/// Signal a finished build. Device failures are reported but never fail the step.
pub(super) fn cmd_notify(outcome: &str, config_path: Option<&Path>) {
    let outcome = BuildOutcome::parse(outcome);
    let notifier = DeviceNotifier::new(load_store(config_path));
    let mut build_log = std::io::stdout().lock();
    notifier.on_build_complete(outcome, &mut build_log);
}

pub(super) fn cmd_set(color: &str, config_path: Option<&Path>) -> Result<()> {
    let color = Color::parse(color)?;
    let notifier = DeviceNotifier::new(load_store(config_path));
    let mut out = std::io::stdout().lock();
    notifier.notify(color, &mut out);
    Ok(())
}
