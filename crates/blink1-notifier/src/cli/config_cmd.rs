//! `config` subcommand — show current configuration and file path.

use std::path::Path;

use super::{BlinkInterface, ConfigOutput, Result, config, kv, kv_indent, kv_width, load_store};

pub(super) fn cmd_config(json: bool, custom_path: Option<&Path>) -> Result<()> {
    let store = load_store(custom_path);
    let settings = store.snapshot();
    let config_path = store.path().map(Path::to_path_buf);
    let config_exists = config_path.as_ref().map(|p| p.exists()).unwrap_or(false);

    if json {
        print_config_json(config_path.as_deref(), config_exists, (*settings).clone());
        return Ok(());
    }

    let w = kv_width(
        &["Config file:"],
        &[
            "blink_interface:",
            "url_base:",
            "command_path:",
            "fade_delay_seconds:",
            "success_color:",
        ],
    );

    match &config_path {
        Some(p) => {
            if config_exists {
                kv("Config file:", format_args!("{} (loaded)", p.display()), w);
            } else {
                kv(
                    "Config file:",
                    format_args!("{} (not found, using defaults)", p.display()),
                    w,
                );
            }
        }
        None => kv("Config file:", "(no config directory)", w),
    }
    println!();

    println!("Settings:");
    kv_indent("blink_interface:", settings.blink_interface, w);
    let url_display = if config::is_valid_url(&settings.url_base) {
        settings.url_base.clone()
    } else {
        format!("{} (invalid: {})", settings.url_base, config::URL_HINT)
    };
    kv_indent("url_base:", url_display, w);
    kv_indent("command_path:", &settings.command_path, w);
    kv_indent("fade_delay_seconds:", settings.fade_delay_seconds, w);
    kv_indent(
        "success_color:",
        format_args!("{} ({})", settings.success_color, settings.success_color.color()),
        w,
    );
    if settings.blink_interface == BlinkInterface::WebApi {
        println!();
        println!("Requests go to {}/blink1/fadeToRGB", settings.url_base);
    }
    Ok(())
}

fn print_config_json(path: Option<&Path>, exists: bool, settings: config::Config) {
    super::print_json(&ConfigOutput {
        config_file: path.map(|p| p.display().to_string()),
        config_file_exists: exists,
        settings,
    });
}
