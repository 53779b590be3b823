//! Unified error type for the blink1-notifier-lib crate.
//!
//! [`NotifierError`] covers the two ways a signal can fail to reach the
//! device (`Io` for process spawn and pipe errors, `Http` for the local web
//! API) plus the administrative error kinds (`Config`, `Color`).

use std::fmt;

/// Unified error type for blink1-notifier-lib operations.
#[derive(Debug)]
pub enum NotifierError {
    /// Standard I/O error (process spawn, stdout read, config persistence).
    Io(std::io::Error),
    /// HTTP request to the blink(1) web API failed at the transport level.
    Http(reqwest::Error),
    /// Configuration validation error.
    Config(String),
    /// Color parsing error.
    Color(String),
}

impl fmt::Display for NotifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifierError::Io(e) => write!(f, "I/O error: {e}"),
            NotifierError::Http(e) => write!(f, "HTTP error: {e}"),
            NotifierError::Config(e) => write!(f, "Config error: {e}"),
            NotifierError::Color(e) => write!(f, "Color error: {e}"),
        }
    }
}

impl std::error::Error for NotifierError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NotifierError::Io(e) => Some(e),
            NotifierError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for NotifierError {
    fn from(e: std::io::Error) -> Self {
        NotifierError::Io(e)
    }
}

impl From<reqwest::Error> for NotifierError {
    fn from(e: reqwest::Error) -> Self {
        NotifierError::Http(e)
    }
}

/// Crate-level Result alias using [`NotifierError`].
pub type Result<T> = std::result::Result<T, NotifierError>;
