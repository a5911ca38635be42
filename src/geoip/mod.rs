//! Geolocation lookups.
//!
//! This module provides:
//! - `GeoRecord`, the flat response object of the geolocation API
//! - `GeoLookup`, the lookup seam, and `ApiClient`, its HTTP implementation

mod lookup;
mod types;

// Re-export public API
pub use lookup::{ApiClient, GeoLookup};
pub use types::{FailureReason, GeoRecord, IpType, LookupStatus};
