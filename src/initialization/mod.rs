//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger
//! - HTTP client and geolocation API client
//! - Concurrency bound
//! - Color handling
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::config::ColorMode;

// Re-export public API
pub use client::{init_api_client, init_client};
pub use logger::init_logger_with;

/// Initializes a semaphore for bounding concurrent lookups.
///
/// # Arguments
///
/// * `count` - Maximum number of lookups in flight, clamped to
///   `Semaphore::MAX_PERMITS`
pub fn init_semaphore(count: usize) -> Arc<Semaphore> {
    Arc::new(Semaphore::new(count.min(Semaphore::MAX_PERMITS)))
}

/// Applies the configured color mode to `colored`.
///
/// `Auto` leaves `colored`'s own detection (`NO_COLOR`, `CLICOLOR`, terminal
/// check) in charge.
pub fn init_color(mode: ColorMode) {
    match mode {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => colored::control::unset_override(),
    }
}
