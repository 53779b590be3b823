//! blink1-notifier — signal build results on a blink(1) USB LED.
//!
//! Run as a post-build step: `blink1-notifier notify "$BUILD_RESULT"`.
//! Device output goes to stdout (the build log); diagnostics go to stderr.

use std::path::PathBuf;

use clap::Parser;

mod cli;

#[derive(Parser)]
#[command(
    name = "blink1-notifier",
    version,
    about = "Signal build results on a blink(1) USB LED"
)]
struct Args {
    /// Output as JSON (for config, test, check-url)
    #[arg(long, global = true)]
    json: bool,

    /// Config file to use instead of the platform default
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log what is sent to the device
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: cli::Command,
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "info,blink1_notifier_lib=debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();

    if let Err(e) = cli::run(args.command, args.json, args.config.as_deref()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
