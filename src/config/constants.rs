//! Configuration constants.
//!
//! This module defines the defaults used when the environment does not
//! override them, plus the fixed usage and version text.

// Remote API
/// Default endpoint template for the geolocation API.
///
/// `{ip}` is replaced by the target address and `{fields}` by the field
/// selection mask. The service is queried over plain HTTP.
pub const DEFAULT_ENDPOINT: &str = "http://ip-api.com/json/{ip}?fields={fields}";
/// Default field selection mask.
///
/// Selects status, message, continent, country, countryCode, regionName, city,
/// district, zip, lat, lon, timezone, offset, currency, isp, org, mobile,
/// proxy, hosting and query.
pub const DEFAULT_FIELDS: &str = "60549115";
/// Placeholder for the target address in the endpoint template
pub const IP_PLACEHOLDER: &str = "{ip}";
/// Placeholder for the field mask in the endpoint template
pub const FIELDS_PLACEHOLDER: &str = "{fields}";

// Network operation timeouts
/// Per-request HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// Environment variable names
pub const ENV_ENDPOINT: &str = "WHOIP_ENDPOINT";
pub const ENV_FIELDS: &str = "WHOIP_FIELDS";
pub const ENV_TIMEOUT_SECS: &str = "WHOIP_TIMEOUT_SECS";
pub const ENV_MAX_CONCURRENCY: &str = "WHOIP_MAX_CONCURRENCY";
pub const ENV_LOG_LEVEL: &str = "WHOIP_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "WHOIP_LOG_FORMAT";
pub const ENV_COLOR: &str = "WHOIP_COLOR";

/// Program name as shown in usage and version output
pub const PROGRAM_NAME: &str = "WhoIP";

/// Version line printed by `-version`.
pub fn version_text() -> String {
    format!("{PROGRAM_NAME} v{}", env!("CARGO_PKG_VERSION"))
}

/// User-Agent sent with every API request.
pub fn user_agent() -> String {
    format!("whoip/{}", env!("CARGO_PKG_VERSION"))
}
