//! Debug logging support
//!
//! When debug mode is enabled via config, operations are logged to
//! ~/.nlconv/nlconv.log

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Initialize the debug logging system
///
/// If debug_enabled is true, sets up file logging.
/// Returns the path to the log file, or None if logging is not enabled.
pub fn init_debug_logging(debug_enabled: bool) -> Result<Option<PathBuf>> {
    if !debug_enabled {
        return Ok(None);
    }

    let log_path = get_log_path()?;

    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()));

    match file {
        Ok(log_file) => {
            let subscriber = registry()
                .with(
                    fmt::layer()
                        .with_writer(log_file)
                        .with_ansi(false)
                        .with_target(false)
                        .with_thread_ids(false)
                        .with_file(false)
                        .with_line_number(false)
                )
                .with(EnvFilter::new("nlconv=debug"));

            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

            Ok(Some(log_path))
        }
        Err(e) => {
            // Fall back to no logging rather than breaking the run
            eprintln!("Warning: Could not create log file: {}", e);
            Ok(None)
        }
    }
}

/// Get the log file path: ~/.nlconv/nlconv.log
fn get_log_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(home_dir.join(".nlconv").join("nlconv.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_debug_logging_disabled() {
        let result = init_debug_logging(false);
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), None, "Should return None when debug is disabled");
    }

    #[test]
    fn test_log_path_is_home_relative() {
        if let Ok(path) = get_log_path() {
            assert!(path.ends_with(".nlconv/nlconv.log"));
        }
    }
}
