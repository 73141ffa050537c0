//! Tracing setup
//!
//! The TUI owns the terminal, so interactive sessions log to
//! `<data_dir>/marquee.log`. Plain CLI commands log to stderr.
//! `MARQUEE_LOG` takes an `EnvFilter` directive. Without it the log file
//! records `info` and stderr only shows `warn`.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::MarqueeConfig;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "MARQUEE_LOG";

/// Level used for the log file when `MARQUEE_LOG` is unset
pub const FILE_DEFAULT: &str = "info";

/// Level used for stderr when `MARQUEE_LOG` is unset
pub const STDERR_DEFAULT: &str = "warn";

fn filter(default: &str) -> EnvFilter {
    filter_from(std::env::var(LOG_ENV).ok().as_deref(), default)
}

fn filter_from(directive: Option<&str>, default: &str) -> EnvFilter {
    directive
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(default))
}

/// Path of the log file used by the TUI
pub fn log_path() -> Result<PathBuf> {
    Ok(MarqueeConfig::data_dir()?.join("marquee.log"))
}

/// Route logs to the log file
pub fn init_file() -> Result<PathBuf> {
    let path = log_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(FILE_DEFAULT))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))?;
    Ok(path)
}

/// Route logs to stderr (warnings only unless `MARQUEE_LOG` says otherwise)
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(STDERR_DEFAULT))
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_per_sink() {
        assert_eq!(filter_from(None, FILE_DEFAULT).to_string(), "info");
        assert_eq!(filter_from(None, STDERR_DEFAULT).to_string(), "warn");
        assert_eq!(filter_from(Some(""), STDERR_DEFAULT).to_string(), "warn");
    }

    #[test]
    fn test_directive_overrides_default() {
        assert_eq!(filter_from(Some("debug"), STDERR_DEFAULT).to_string(), "debug");
    }
}
