//! CLI subcommands — build notification, manual signalling, configuration.

mod config_cmd;
mod configure;
mod notify;
mod test_cmd;

use std::path::Path;
use std::sync::Arc;

use clap::Subcommand;
use serde::Serialize;

pub(super) use blink1_notifier_lib::config::{self, BlinkInterface, Config, ConfigStore};
pub(super) use blink1_notifier_lib::error::Result;
pub(super) use blink1_notifier_lib::led::{Color, SuccessColor};
pub(super) use blink1_notifier_lib::notifier::DeviceNotifier;
pub(super) use blink1_notifier_lib::outcome::BuildOutcome;

const PADDING: usize = 2;

/// Compute alignment width for a command's key-value output.
/// Ensures at least PADDING spaces after the longest key in either level,
/// with top-level and indent values aligned to the same column.
pub(super) fn kv_width(top: &[&str], indent: &[&str]) -> usize {
    let top_max = top.iter().map(|k| k.len()).max().unwrap_or(0);
    let indent_max = indent.iter().map(|k| k.len()).max().unwrap_or(0);
    let top_need = if top.is_empty() { 0 } else { top_max + PADDING };
    // Indent keys lose 2 chars of inner width to the "  " prefix
    let indent_need = if indent.is_empty() {
        0
    } else {
        indent_max + PADDING + 2
    };
    top_need.max(indent_need)
}

pub(super) fn format_kv(key: &str, value: impl std::fmt::Display, w: usize) -> String {
    format!("{key:<width$}{value}", width = w)
}

pub(super) fn kv(key: &str, value: impl std::fmt::Display, w: usize) {
    println!("{}", format_kv(key, value, w));
}

pub(super) fn kv_indent(key: &str, value: impl std::fmt::Display, w: usize) {
    println!("  {key:<width$}{value}", width = w - 2);
}

pub(super) fn print_json(value: &impl Serialize) {
    println!("{}", serde_json::to_string_pretty(value).unwrap());
}

/// Load the config store from `custom_path` or the platform default.
pub(super) fn load_store(custom_path: Option<&Path>) -> Arc<ConfigStore> {
    Arc::new(ConfigStore::load(custom_path))
}

// ── JSON output structs ──

#[derive(Serialize)]
pub(super) struct ConfigOutput {
    pub config_file: Option<String>,
    pub config_file_exists: bool,
    pub settings: Config,
}

#[derive(Serialize)]
pub(super) struct TestOutput {
    pub interface: BlinkInterface,
    pub sent: bool,
    pub message: String,
}

#[derive(Serialize)]
pub(super) struct CheckUrlOutput {
    pub url: String,
    pub valid: bool,
    pub message: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Signal a finished build on the LED (always exits successfully)
    Notify {
        /// Build result (SUCCESS, UNSTABLE, FAILURE, ABORTED, NOT_BUILT) or ball color (blue, yellow, red, ...)
        outcome: String,
    },

    /// Fade the LED to a color
    Set {
        /// Color as #RRGGBB or a name (blue, green, yellow, red, white, off)
        color: String,
    },

    /// Send a test blink, optionally with unsaved candidate settings
    Test {
        /// Interface to test: webApi or commandline (default: configured)
        #[arg(long)]
        interface: Option<BlinkInterface>,
        /// Web API base URL (default: configured)
        #[arg(long)]
        url_base: Option<String>,
        /// Path to blink1-tool (default: configured)
        #[arg(long)]
        command_path: Option<String>,
    },

    /// Check that a web API base URL is acceptable
    CheckUrl {
        /// URL to check, e.g. http://localhost:8934
        url: String,
    },

    /// Show current configuration and file path
    Config,

    /// Change and save configuration
    Configure {
        /// Interface: webApi or commandline
        #[arg(long)]
        interface: Option<BlinkInterface>,
        /// Web API base URL
        #[arg(long)]
        url_base: Option<String>,
        /// Path to blink1-tool
        #[arg(long)]
        command_path: Option<String>,
        /// Fade duration in seconds for the web API
        #[arg(long)]
        fade_delay: Option<f64>,
        /// Success color: green or blue
        #[arg(long)]
        success_color: Option<SuccessColor>,
        /// Save even if validation fails
        #[arg(long)]
        force: bool,
    },
}

/// Warn if `--json` was passed to a command that doesn't support it.
fn warn_json_unsupported(cmd_name: &str) {
    log::warn!("--json is not supported for `{cmd_name}` (ignored)");
}

pub fn run(cmd: Command, json: bool, config_path: Option<&Path>) -> Result<()> {
    match cmd {
        Command::Notify { outcome } => {
            if json {
                warn_json_unsupported("notify");
            }
            notify::cmd_notify(&outcome, config_path);
            Ok(())
        }
        Command::Set { color } => {
            if json {
                warn_json_unsupported("set");
            }
            notify::cmd_set(&color, config_path)
        }
        Command::Test {
            interface,
            url_base,
            command_path,
        } => {
            let candidate = test_cmd::Candidate {
                interface,
                url_base,
                command_path,
            };
            test_cmd::cmd_test(candidate, json, config_path);
            Ok(())
        }
        Command::CheckUrl { url } => configure::cmd_check_url(&url, json),
        Command::Config => config_cmd::cmd_config(json, config_path),
        Command::Configure {
            interface,
            url_base,
            command_path,
            fade_delay,
            success_color,
            force,
        } => {
            if json {
                warn_json_unsupported("configure");
            }
            let changes = configure::Changes {
                interface,
                url_base,
                command_path,
                fade_delay,
                success_color,
            };
            configure::cmd_configure(changes, force, config_path)
        }
    }
}
