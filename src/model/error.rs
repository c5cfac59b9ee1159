//! Error types for pane-search.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via
//! `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error for failures that abort the process
//!   (terminal I/O, configuration, logging setup, remote command setup)
//! - [`StartupError`] - Target windows could not be resolved. Never aborts:
//!   the session starts in error-only mode and shows the message on screen.
//! - [`RemoteError`] - A remote-control command failed. Logged and dropped;
//!   markers are re-issued on the next keystroke anyway.
//! - [`StoreError`] - The persisted last query could not be read or written.
//!   Logged and dropped.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::view::TuiError;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file exists but could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Log file could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// The remote-control command could not be set up.
    #[error("Remote control error: {0}")]
    Remote(#[from] RemoteError),

    /// Terminal or TUI rendering error.
    ///
    /// Without a working terminal the overlay cannot function; the terminal is
    /// restored and the process exits.
    #[error("Terminal error: {0}")]
    Terminal(#[from] TuiError),
}

/// Resolution of the target windows failed at startup.
///
/// The `Display` text is exactly what the user sees below the prompt.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StartupError {
    /// Missing or non-numeric first argument.
    #[error("Error: Window id must be provided as the first argument.")]
    MissingWindowId,

    /// `--all-windows` was given but no tab contains the window.
    #[error("Error: Could not find the window id provided.")]
    WindowNotFound,

    /// The tab was found but every window in it has focus (i.e. it only
    /// holds the overlay itself).
    #[error("Error: No other windows found in the tab.")]
    NoTargetWindows,
}

/// A remote-control command could not be carried out.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The remote-control program could not be started.
    #[error("Failed to spawn {program}: {source}")]
    Spawn {
        /// Program that failed to start.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The command ran but reported failure.
    #[error("`{command}` failed ({status}): {stderr}")]
    CommandFailed {
        /// Rendered command line, for logging.
        command: String,
        /// Exit status of the child.
        status: ExitStatus,
        /// Trimmed stderr of the child.
        stderr: String,
    },

    /// Window listing was not the expected JSON.
    #[error("Invalid window listing: {0}")]
    InvalidTopology(#[from] serde_json::Error),

    /// No remote-control program is configured.
    #[error("Remote command is empty")]
    EmptyCommand,
}

/// Persisted session state could not be read or written.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the state file failed.
    #[error("State file I/O error at {path:?}: {source}")]
    Io {
        /// State file (or its directory) involved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The state file is not valid JSON of the expected shape.
    #[error("Invalid state file {path:?}: {source}")]
    Format {
        /// State file that failed to parse.
        path: PathBuf,
        /// Parse error details.
        #[source]
        source: serde_json::Error,
    },
}
