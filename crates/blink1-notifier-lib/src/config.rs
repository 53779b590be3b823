//! Notifier configuration — TOML-based, platform-aware paths.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::led::SuccessColor;

/// Header comment prepended to saved config files.
const CONFIG_HEADER: &str =
    "# blink1-notifier configuration — `blink1-notifier configure` rewrites this file.\n\n";

pub const DEFAULT_URL_BASE: &str = "http://localhost:8934";
pub const DEFAULT_COMMAND_PATH: &str = "/usr/bin/blink1-tool";
pub const DEFAULT_FADE_DELAY_SECONDS: f64 = 0.5;

/// How the device is reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlinkInterface {
    /// HTTP GET against the local `blink1-server` daemon.
    #[default]
    #[serde(rename = "webApi")]
    WebApi,
    /// Spawn `blink1-tool`.
    #[serde(rename = "commandline")]
    Commandline,
}

impl BlinkInterface {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlinkInterface::WebApi => "webApi",
            BlinkInterface::Commandline => "commandline",
        }
    }
}

impl fmt::Display for BlinkInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlinkInterface {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "webapi" | "web" => Ok(BlinkInterface::WebApi),
            "commandline" | "cli" => Ok(BlinkInterface::Commandline),
            other => Err(format!(
                "unknown blink interface \"{other}\" (expected webApi or commandline)"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Transport used to reach the device. Default: "webApi".
    #[serde(default)]
    pub blink_interface: BlinkInterface,

    /// Base URL of the blink(1) web API. Default: "http://localhost:8934".
    #[serde(default = "default_url_base")]
    pub url_base: String,

    /// Path to the blink1-tool executable. Default: "/usr/bin/blink1-tool".
    #[serde(default = "default_command_path")]
    pub command_path: String,

    /// Fade duration passed to the web API, in seconds.
    #[serde(default = "default_fade_delay")]
    pub fade_delay_seconds: f64,

    /// Color for successful builds: "green" or "blue".
    #[serde(default)]
    pub success_color: SuccessColor,
}

fn default_url_base() -> String {
    DEFAULT_URL_BASE.into()
}
fn default_command_path() -> String {
    DEFAULT_COMMAND_PATH.into()
}
fn default_fade_delay() -> f64 {
    DEFAULT_FADE_DELAY_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            blink_interface: BlinkInterface::default(),
            url_base: default_url_base(),
            command_path: default_command_path(),
            fade_delay_seconds: DEFAULT_FADE_DELAY_SECONDS,
            success_color: SuccessColor::default(),
        }
    }
}

/// Whether `value` looks like a web API base URL.
pub fn is_valid_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Validation errors that [`Config::validate`] can return.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// `url_base` lacks an `http://` or `https://` prefix.
    InvalidUrl(String),
    /// Command-line interface selected but `command_path` is blank.
    EmptyCommandPath,
    /// `fade_delay_seconds` is negative, NaN or infinite.
    InvalidFadeDelay(f64),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidUrl(url) => {
                write!(f, "Invalid url_base \"{url}\": {}", URL_HINT)
            }
            ValidationError::EmptyCommandPath => write!(f, "Command path cannot be empty"),
            ValidationError::InvalidFadeDelay(d) => {
                write!(f, "Invalid fade delay {d}: must be a non-negative number of seconds")
            }
        }
    }
}

/// Message shown when a URL fails [`is_valid_url`].
pub const URL_HINT: &str = "URL should start with http:// or https://.";

impl Config {
    /// Platform-specific config directory.
    pub fn dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("blink1-notifier"))
    }

    /// Full path to config file.
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|d| d.join("config.toml"))
    }

    /// Save config to an arbitrary path atomically (write to temp file, then rename).
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let serialized = toml::to_string_pretty(self).map_err(std::io::Error::other)?;
        let contents = format!("{CONFIG_HEADER}{serialized}");
        let tmp = path.with_extension("toml.tmp");
        std::fs::write(&tmp, &contents)?;
        match std::fs::rename(&tmp, path) {
            Ok(()) => Ok(()),
            Err(_) => {
                // Rename can fail across filesystems; fall back to direct write + cleanup
                let result = std::fs::write(path, &contents);
                let _ = std::fs::remove_file(&tmp);
                result
            }
        }
    }

    /// Load config from an arbitrary path, returning the config and any parse warnings.
    ///
    /// Returns `(defaults, [])` if the file doesn't exist.
    /// Returns `(defaults, [warning])` if the file exists but can't be parsed.
    /// Returns `(config, warnings)` if it parses but holds invalid values.
    pub fn load_from(path: &Path) -> (Self, Vec<String>) {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => {
                    let warnings = match config.validate() {
                        Ok(()) => vec![],
                        Err(errors) => errors
                            .iter()
                            .map(|e| format!("{} ({})", e, path.display()))
                            .collect(),
                    };
                    (config, warnings)
                }
                Err(e) => {
                    let warning = format!(
                        "config parse error ({}), using defaults: {e}",
                        path.display()
                    );
                    (Self::default(), vec![warning])
                }
            },
            Err(_) => (Self::default(), vec![]),
        }
    }

    /// Validate the config, collecting all errors.
    ///
    /// The URL is always checked; the command path only when the command-line
    /// interface is selected.
    pub fn validate(&self) -> std::result::Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if !is_valid_url(&self.url_base) {
            errors.push(ValidationError::InvalidUrl(self.url_base.clone()));
        }

        if self.blink_interface == BlinkInterface::Commandline
            && self.command_path.trim().is_empty()
        {
            errors.push(ValidationError::EmptyCommandPath);
        }

        if !self.fade_delay_seconds.is_finite() || self.fade_delay_seconds < 0.0 {
            errors.push(ValidationError::InvalidFadeDelay(self.fade_delay_seconds));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Owns the active configuration.
///
/// Readers take an immutable [`Arc<Config>`] snapshot; [`ConfigStore::update`]
/// persists the new config and then swaps the snapshot, so a notification in
/// flight never sees a half-applied change.
#[derive(Debug)]
pub struct ConfigStore {
    path: Option<PathBuf>,
    current: RwLock<Arc<Config>>,
}

impl ConfigStore {
    /// Load from `path`, or from the platform default path when `None`.
    ///
    /// Parse problems are logged and defaults are used.
    pub fn load(path: Option<&Path>) -> Self {
        let path = path.map(Path::to_path_buf).or_else(Config::path);
        let config = match &path {
            Some(p) => {
                let (config, warnings) = Config::load_from(p);
                for w in &warnings {
                    log::warn!("{w}");
                }
                config
            }
            None => {
                log::warn!("no config directory, using defaults");
                Config::default()
            }
        };
        ConfigStore {
            path,
            current: RwLock::new(Arc::new(config)),
        }
    }

    /// A store that is never written to disk.
    pub fn in_memory(config: Config) -> Self {
        ConfigStore {
            path: None,
            current: RwLock::new(Arc::new(config)),
        }
    }

    /// Backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Current configuration.
    pub fn snapshot(&self) -> Arc<Config> {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*current)
    }

    /// Validate, persist and activate `config`.
    pub fn update(&self, config: Config) -> crate::error::Result<()> {
        if let Err(errors) = config.validate() {
            let msg = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(crate::NotifierError::Config(msg));
        }
        self.update_unchecked(config)
    }

    /// Persist and activate `config` without validating it.
    ///
    /// The write lock is held across the save so the file and the snapshot
    /// always agree.
    pub fn update_unchecked(&self, config: Config) -> crate::error::Result<()> {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(path) = &self.path {
            config.save_to(path)?;
        }
        *current = Arc::new(config);
        Ok(())
    }
}
