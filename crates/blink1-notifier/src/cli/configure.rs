//! `configure` / `check-url` subcommands — the administrative form.

use std::path::Path;

use blink1_notifier_lib::NotifierError;

use super::{
    BlinkInterface, CheckUrlOutput, Result, SuccessColor, config, load_store, print_json,
};

/// Fields to change; `None` keeps the stored value.
#[derive(Debug, Default)]
pub(super) struct Changes {
    pub interface: Option<BlinkInterface>,
    pub url_base: Option<String>,
    pub command_path: Option<String>,
    pub fade_delay: Option<f64>,
    pub success_color: Option<SuccessColor>,
}

pub(super) fn cmd_configure(
    changes: Changes,
    force: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let store = load_store(config_path);
    let Some(path) = store.path().map(Path::to_path_buf) else {
        return Err(NotifierError::Config("no config directory; pass --config".into()));
    };

    let mut next = (*store.snapshot()).clone();
    if let Some(interface) = changes.interface {
        next.blink_interface = interface;
    }
    if let Some(url_base) = changes.url_base {
        next.url_base = url_base;
    }
    if let Some(command_path) = changes.command_path {
        next.command_path = command_path;
    }
    if let Some(delay) = changes.fade_delay {
        next.fade_delay_seconds = delay;
    }
    if let Some(color) = changes.success_color {
        next.success_color = color;
    }

    if force {
        if let Err(errors) = next.validate() {
            for e in &errors {
                log::warn!("{e} (saving anyway)");
            }
        }
        store.update_unchecked(next)?;
    } else {
        store.update(next)?;
    }

    println!("Saved {}", path.display());
    Ok(())
}

/// The web API URL check. Invalid URLs are an error so scripts can test the exit code.
pub(super) fn cmd_check_url(url: &str, json: bool) -> Result<()> {
    let valid = config::is_valid_url(url);
    if json {
        print_json(&CheckUrlOutput {
            url: url.to_string(),
            valid,
            message: (!valid).then(|| config::URL_HINT.to_string()),
        });
    } else if valid {
        println!("OK");
    }
    if valid {
        Ok(())
    } else {
        Err(NotifierError::Config(config::URL_HINT.into()))
    }
}
