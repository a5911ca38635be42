//! Error handling.
//!
//! This module provides:
//! - The error taxonomy (`ArgumentError`, `ValidationError`, `LookupError`,
//!   `InitializationError`) and the top-level `WhoipError`
//! - Exit codes
//! - Categorization of transport errors
//!
//! Argument and validation errors are raised before any network activity.
//! A geolocation answer with `status: fail` is not an error at all and is
//! rendered like any other record.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{
    ArgumentError, ErrorType, InitializationError, LookupError, ValidationError, WhoipError,
    EXIT_FAILURE, EXIT_SUCCESS, EXIT_USAGE,
};
