//! Command-line token parsing.
//!
//! Flags use a single `-` marker followed by a name and an optional
//! `=value`, e.g. `-format=json`. Names are matched case-insensitively
//! against a fixed alias table after stripping exactly one leading `-`, so
//! `--help` resolves through the `-help` alias. Every other token must be an
//! IPv4 address with an optional port.

use log::trace;

use super::target::Target;
use crate::error_handling::ArgumentError;

/// Canonical flag names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    Help,
    Version,
    Format,
}

impl Flag {
    /// Resolves a flag name (without the leading marker) through the alias table.
    pub fn from_alias(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "-h" | "-help" | "?" | "help" | "h" => Some(Flag::Help),
            "v" | "version" | "-version" => Some(Flag::Version),
            "format" | "f" | "-format" => Some(Flag::Format),
            _ => None,
        }
    }
}

/// How a flag appeared on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    /// `-name`
    Present,
    /// `-name=value` (the value may be empty)
    Value(String),
}

/// Flags seen on the command line. A repeated flag keeps its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    pub help: Option<FlagValue>,
    pub version: Option<FlagValue>,
    pub format: Option<FlagValue>,
}

impl Flags {
    fn set(&mut self, flag: Flag, value: FlagValue) {
        let slot = match flag {
            Flag::Help => &mut self.help,
            Flag::Version => &mut self.version,
            Flag::Format => &mut self.format,
        };
        *slot = Some(value);
    }
}

/// Parsed command line, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Targets in command-line order
    pub targets: Vec<Target>,
    pub flags: Flags,
}

/// Parses the tokens following the program name.
///
/// Stops at the first token that is neither a known flag nor a valid target
/// and returns an error naming it.
pub fn parse_args<I, S>(args: I) -> Result<Options, ArgumentError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = Options::default();

    for arg in args {
        let token = arg.as_ref();
        if let Some(body) = token.strip_prefix('-') {
            let (name, value) = match body.split_once('=') {
                Some((name, value)) => (name, FlagValue::Value(value.to_string())),
                None => (body, FlagValue::Present),
            };
            let flag = Flag::from_alias(name)
                .ok_or_else(|| ArgumentError::UnknownFlag(token.to_string()))?;
            trace!("Parsed flag {flag:?} = {value:?} from '{token}'");
            options.flags.set(flag, value);
        } else {
            options.targets.push(token.parse()?);
        }
    }

    Ok(options)
}
