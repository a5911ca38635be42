//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::fmt::Display;
use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use chrono::{DateTime, SecondsFormat, Utc};
use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter};
use serde_json::json;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors and emojis) and JSON formats for structured logging. Logs are
/// written to stderr; stdout carries only results and error reports.
///
/// The logger reads from the `RUST_LOG` environment variable first, and the
/// provided `level` overrides it for this crate.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Show each request as it is issued
/// WHOIP_LOG_LEVEL=debug whoip 8.8.8.8
///
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=reqwest=debug whoip 8.8.8.8
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    builder.filter_module("reqwest", LevelFilter::Info.min(level));
    builder.filter_module("hyper", LevelFilter::Info.min(level));
    builder.filter_module("hyper_util", LevelFilter::Info.min(level));
    builder.filter_module("whoip", level);
    builder.target(env_logger::Target::Stderr);

    match format {
        LogFormat::Json => builder.format(|buf, record| {
            let line = json_line(Utc::now(), record.level(), record.target(), record.args());
            writeln!(buf, "{line}")
        }),
        LogFormat::Plain => builder.format(|buf, record| {
            let line = plain_line(record.level(), record.target(), record.args());
            writeln!(buf, "{line}")
        }),
    };

    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// One JSON object per line, for log shippers.
fn json_line(ts: DateTime<Utc>, level: Level, target: &str, message: impl Display) -> String {
    json!({
        "ts": ts.to_rfc3339_opts(SecondsFormat::Millis, true),
        "level": level.as_str(),
        "target": target,
        "msg": message.to_string(),
    })
    .to_string()
}

/// `<marker> <target> [<LEVEL>] <message>` with the level colored.
fn plain_line(level: Level, target: &str, message: impl Display) -> String {
    let (marker, label) = level_style(level);
    format!("{marker} {} [{label}] {message}", target.cyan())
}

fn level_style(level: Level) -> (&'static str, ColoredString) {
    let label = level.as_str();
    match level {
        Level::Error => ("❌", label.red()),
        Level::Warn => ("⚠️", label.yellow()),
        Level::Info => ("✔️", label.green()),
        Level::Debug => ("🔍", label.blue()),
        Level::Trace => ("🔬", label.purple()),
    }
}
