//! User-facing text: usage, version and error reports.
//!
//! Everything here goes to stdout, including errors.

use std::fmt::Display;
use std::io::{self, Write};

use colored::Colorize;

use crate::config::version_text;
use crate::export::format_names;

/// Usage text printed by `-help`.
pub fn usage_text() -> String {
    format!(
        "Usage: whoip <IP address> [-help] [-version] [-format=...]\n\
         Acceptable values for -format: {}",
        format_names().join(", ")
    )
}

pub fn write_usage<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", usage_text())
}

pub fn write_version<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", version_text())
}

/// Writes a highlighted `ERROR: <message>` line and an optional detail line.
pub fn write_error<W: Write>(
    out: &mut W,
    message: impl Display,
    detail: Option<&str>,
) -> io::Result<()> {
    writeln!(out, "{}", format!("ERROR: {message}").as_str().white().on_red())?;
    if let Some(detail) = detail {
        writeln!(out, "{detail}")?;
    }
    Ok(())
}
