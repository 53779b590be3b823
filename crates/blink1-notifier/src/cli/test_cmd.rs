//! `test` subcommand — one-shot connectivity check.

use std::path::Path;

use super::{BlinkInterface, DeviceNotifier, TestOutput, load_store, print_json};

/// Unsaved settings to try; `None` falls back to the stored value.
#[derive(Debug, Default)]
pub(super) struct Candidate {
    pub interface: Option<BlinkInterface>,
    pub url_base: Option<String>,
    pub command_path: Option<String>,
}

pub(super) fn cmd_test(candidate: Candidate, json: bool, config_path: Option<&Path>) {
    let notifier = DeviceNotifier::new(load_store(config_path));
    let stored = notifier.store().snapshot();

    let interface = candidate.interface.unwrap_or(stored.blink_interface);
    let url_base = candidate.url_base.as_deref().unwrap_or(&stored.url_base);
    let command_path = candidate
        .command_path
        .as_deref()
        .unwrap_or(&stored.command_path);

    let report = notifier.test_connection(interface, url_base, command_path);

    if json {
        print_json(&TestOutput {
            interface,
            sent: report.sent,
            message: report.message,
        });
    } else {
        println!("{report}");
    }
}
