//! Turning parsed options into a runnable action.

use super::args::{FlagValue, Options};
use super::target::Target;
use crate::error_handling::ValidationError;
use crate::export::OutputFormat;

/// A validated lookup request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Targets in command-line order
    pub targets: Vec<Target>,
    pub format: OutputFormat,
}

/// What the program should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Help,
    Version,
    Lookup(Invocation),
}

/// Validates parsed options.
///
/// The format flag is checked first, then the target list must be non-empty,
/// and only then do `-version` and `-help` short-circuit.
pub fn validate(options: Options) -> Result<Action, ValidationError> {
    let format = match options.flags.format {
        None => OutputFormat::default(),
        Some(FlagValue::Present) => return Err(ValidationError::MissingFormatValue),
        Some(FlagValue::Value(name)) => {
            OutputFormat::from_name(&name).ok_or(ValidationError::UnknownFormat(name))?
        }
    };

    if options.targets.is_empty() {
        return Err(ValidationError::NoTargets);
    }

    if options.flags.version.is_some() {
        return Ok(Action::Version);
    }
    if options.flags.help.is_some() {
        return Ok(Action::Help);
    }

    Ok(Action::Lookup(Invocation {
        targets: options.targets,
        format,
    }))
}
