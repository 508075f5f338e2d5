// src/logging.rs

//! Logging setup for `pacetrack` using `tracing` + `tracing-subscriber`.
//!
//! Priority for determining the filter:
//! 1. `--log-level` CLI flag (if provided)
//! 2. `PACETRACK_LOG` environment variable, either a bare level ("debug") or
//!    full directives ("pacetrack::engine=trace,info")
//! 3. default to `info`
//!
//! Logs are sent to STDERR so that stdout carries only the progress summary.

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::LogLevel;

/// Environment variable consulted when no CLI level is given.
pub const LOG_ENV: &str = "PACETRACK_LOG";

/// Initialise global logging subscriber.
///
/// Call once at startup; a second call returns an error.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let filter = match cli_level {
        Some(lvl) => EnvFilter::new(level_directive(lvl)),
        None => std::env::var(LOG_ENV)
            .ok()
            .and_then(|s| filter_from_env_value(&s))
            .unwrap_or_else(|| EnvFilter::new("info")),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("initialising logging: {e}"))
}

/// Filter directive for a CLI level.
pub fn level_directive(lvl: LogLevel) -> &'static str {
    match lvl {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }
}

/// Parse the value of [`LOG_ENV`].
///
/// A bare word must be a level name; anything else is only accepted as a
/// directive list (`target=level`, comma separated). Blank, unknown or
/// malformed values yield `None`.
pub fn filter_from_env_value(s: &str) -> Option<EnvFilter> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if s.contains('=') || s.contains(',') {
        return EnvFilter::try_new(s).ok();
    }
    parse_level_str(s).map(|lvl| EnvFilter::new(level_directive(lvl)))
}

fn parse_level_str(s: &str) -> Option<LogLevel> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(LogLevel::Error),
        "warn" | "warning" => Some(LogLevel::Warn),
        "info" => Some(LogLevel::Info),
        "debug" => Some(LogLevel::Debug),
        "trace" => Some(LogLevel::Trace),
        _ => None,
    }
}
