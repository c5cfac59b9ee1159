//! File logging for the overlay.
//!
//! The overlay draws on the whole window, so nothing may be written to the
//! terminal. Everything goes to `log_file_path` instead; follow it with
//! `tail -f` from another window while reproducing a problem.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Level used when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "info";

/// Why the log file could not be set up.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The directory holding the log file could not be created.
    #[error("cannot create log directory {dir:?}: {source}")]
    CreateDir {
        /// Directory that was being created
        dir: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// `log_file_path` names a directory or root, not a file.
    #[error("log file path has no file name: {0:?}")]
    NoFileName(PathBuf),

    /// `init` already ran in this process.
    #[error("logging already initialized")]
    AlreadyInitialized,
}

/// Split `log_path` into the directory to create and the file name.
///
/// A bare file name logs into the current directory.
fn log_location(log_path: &Path) -> Result<(&Path, &OsStr), LoggingError> {
    let file_name = log_path
        .file_name()
        .ok_or_else(|| LoggingError::NoFileName(log_path.to_path_buf()))?;
    let dir = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Ok((dir, file_name))
}

/// Send this process's `tracing` output to `log_path`, appending.
///
/// `RUST_LOG` selects the filter, falling back to `info`. Output is plain
/// text without ANSI escapes.
///
/// # Errors
///
/// Fails if the path has no file name, its directory cannot be created, or
/// logging was already initialized.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    let (dir, file_name) = log_location(log_path)?;
    std::fs::create_dir_all(dir).map_err(|source| LoggingError::CreateDir {
        dir: dir.to_path_buf(),
        source,
    })?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(tracing_appender::rolling::never(dir, file_name))
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)?;

    info!(pid = std::process::id(), path = ?log_path, "pane-search started");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    #[test]
    fn bare_file_name_logs_into_current_directory() {
        let (dir, file) = log_location(Path::new("search.log")).unwrap();
        assert_eq!(dir, Path::new("."));
        assert_eq!(file, "search.log");
    }

    #[test]
    fn nested_path_splits_into_directory_and_file() {
        let (dir, file) = log_location(Path::new("/var/tmp/pane-search/search.log")).unwrap();
        assert_eq!(dir, Path::new("/var/tmp/pane-search"));
        assert_eq!(file, "search.log");
    }

    #[test]
    fn root_path_has_no_file_name() {
        let err = log_location(Path::new("/")).unwrap_err();
        assert!(matches!(err, LoggingError::NoFileName(_)), "got {err:?}");
    }

    #[test]
    #[serial(tracing_init)]
    fn init_creates_missing_log_directory() {
        let test_dir = std::env::temp_dir().join("pane_search_test_logs_create");
        let _ = fs::remove_dir_all(&test_dir);

        // A subscriber set by another test makes this return an error after
        // the directory exists.
        let _ = init(&test_dir.join("nested").join("search.log"));

        assert!(test_dir.join("nested").is_dir());
        let _ = fs::remove_dir_all(&test_dir);
    }

    #[test]
    #[serial(tracing_init)]
    fn second_init_is_rejected() {
        let test_dir = std::env::temp_dir().join("pane_search_test_logs_twice");
        let log_file = test_dir.join("search.log");

        let _ = init(&log_file);
        let second = init(&log_file);

        assert!(matches!(second, Err(LoggingError::AlreadyInitialized)));
        let _ = fs::remove_dir_all(&test_dir);
    }
}
