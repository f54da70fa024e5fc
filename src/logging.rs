//! Logging setup for the binary.
//!
//! With `--debug`, everything from `debug` up goes to stdout. Otherwise
//! `info` and above are appended to a local log file through a
//! non-blocking writer; keep the returned guard alive until exit so the
//! last lines are flushed. `RUST_LOG` overrides the level in both modes.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use crate::{Error, Result};

/// Log file written when `--debug` is not given.
pub const DEFAULT_LOG_FILE: &str = "cbpro_recurring_buy.log";

/// Install the global subscriber.
///
/// Returns the file writer's guard, or `None` when logging to stdout.
pub fn init(debug: bool, log_file: &Path) -> Result<Option<WorkerGuard>> {
    let level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
            .map_err(|e| Error::Configuration(format!("Failed to initialise logging: {}", e)))?;
        return Ok(None);
    }

    let (dir, file_name) = split_log_path(log_file)?;
    std::fs::create_dir_all(&dir)?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(&dir)
        .map_err(|e| {
            Error::Configuration(format!(
                "Cannot open log file {}: {}",
                log_file.display(),
                e
            ))
        })?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::Configuration(format!("Failed to initialise logging: {}", e)))?;

    Ok(Some(guard))
}

fn split_log_path(path: &Path) -> Result<(PathBuf, String)> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            Error::Configuration(format!("Log path {} has no file name", path.display()))
        })?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((dir, file_name.to_string()))
}
