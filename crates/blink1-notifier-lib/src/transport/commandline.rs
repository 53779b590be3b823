//! `blink1-tool` command-line transport.

use std::fmt;
use std::io::{BufRead, BufReader, Read, Write};
use std::process::{Command, Stdio};

use super::{Blink1Transport, ConnectionReport};
use crate::error::Result;
use crate::led::Color;

/// A program plus its arguments, displayed as the shell line it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).stdin(Stdio::null()).stderr(Stdio::null());
        cmd
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// `{command_path} --rgb {r},{g},{b}`
pub fn fade_command(command_path: &str, color: Color) -> CommandSpec {
    CommandSpec {
        program: command_path.to_string(),
        args: vec!["--rgb".into(), color.decimal()],
    }
}

/// `{command_path} --rgb 0,0,255 --blink 3`
pub fn test_command(command_path: &str) -> CommandSpec {
    CommandSpec {
        program: command_path.to_string(),
        args: vec![
            "--rgb".into(),
            Color::BLUE.decimal(),
            "--blink".into(),
            "3".into(),
        ],
    }
}

/// Copy `source` into `sink` line by line. Invalid UTF-8 is replaced, not fatal.
fn stream_lines(source: impl Read, sink: &mut dyn Write) -> std::io::Result<()> {
    let mut reader = BufReader::new(source);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        let line = buf.strip_suffix(b"\n").unwrap_or(&buf);
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        writeln!(sink, "{}", String::from_utf8_lossy(line))?;
    }
}

#[derive(Debug, Clone)]
pub struct Commandline {
    command_path: String,
}

impl Commandline {
    pub fn new(command_path: impl Into<String>) -> Self {
        Commandline {
            command_path: command_path.into(),
        }
    }

    pub fn command_path(&self) -> &str {
        &self.command_path
    }
}

impl Blink1Transport for Commandline {
    /// Runs the tool and waits for it; the exit status is logged, not checked.
    /// `fade_delay` is not passed on.
    fn fade_to_rgb(&self, color: Color, _fade_delay: f64, build_log: &mut dyn Write) -> Result<()> {
        let spec = fade_command(&self.command_path, color);
        log::debug!("running {spec}");
        let mut child = spec.command().stdout(Stdio::piped()).spawn()?;

        let streamed = match child.stdout.take() {
            Some(stdout) => stream_lines(stdout, build_log),
            None => Ok(()),
        };
        // Reap before reporting a stream error.
        let status = child.wait()?;
        log::debug!("{spec} exited with {status}");
        streamed?;
        Ok(())
    }

    fn test_blink(&self, _fade_delay: f64) -> ConnectionReport {
        let spec = test_command(&self.command_path);
        match spec.command().stdout(Stdio::null()).status() {
            Ok(status) => {
                log::debug!("{spec} exited with {status}");
                ConnectionReport::sent(format!("Command executed: {spec}"))
            }
            Err(e) => {
                log::warn!("blink1-tool test failed: {e}: {spec}");
                ConnectionReport::failed(format!("Error occurred: {e}"))
            }
        }
    }
}
