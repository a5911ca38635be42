//! Application configuration and constants.
//!
//! This module provides:
//! - Default values and fixed output text
//! - The environment-driven `Config` and its validation

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{ColorMode, Config, ConfigValidationError, LogFormat, LogLevel};
