//! Command-line front end.
//!
//! This module provides argument parsing, target validation, the
//! validation step that yields an `Action`, and the usage/version/error
//! text shown to users.

pub mod args;
pub mod output;
pub mod target;
pub mod validate;

// Re-export public API
pub use args::{parse_args, Flag, FlagValue, Flags, Options};
pub use output::{usage_text, write_error, write_usage, write_version};
pub use target::Target;
pub use validate::{validate, Action, Invocation};
