//! Configuration types.
//!
//! The CLI surface is limited to IP targets and the help/version/format flags,
//! so everything else (endpoint, timeout, concurrency bound, logging, color)
//! is read from `WHOIP_*` environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

use strum_macros::{Display, EnumString};
use tokio::sync::Semaphore;

use crate::config::constants::{
    DEFAULT_ENDPOINT, DEFAULT_FIELDS, DEFAULT_TIMEOUT_SECS, ENV_COLOR, ENV_ENDPOINT, ENV_FIELDS,
    ENV_LOG_FORMAT, ENV_LOG_LEVEL, ENV_MAX_CONCURRENCY, ENV_TIMEOUT_SECS, IP_PLACEHOLDER,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Whether results and errors are colorized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ColorMode {
    /// Let `colored` decide from the terminal and `NO_COLOR`/`CLICOLOR`
    Auto,
    Always,
    Never,
}

/// Runtime configuration.
///
/// # Examples
///
/// ```no_run
/// use whoip::Config;
///
/// let config = Config {
///     timeout_seconds: 3,
///     max_concurrency: Some(4),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Endpoint template containing `{ip}` and optionally `{fields}`
    pub endpoint: String,

    /// Field selection mask substituted for `{fields}`
    pub fields: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// Maximum lookups in flight; `None` dispatches every target at once
    pub max_concurrency: Option<usize>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Color handling for stdout
    pub color: ColorMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            fields: DEFAULT_FIELDS.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            max_concurrency: None,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            color: ColorMode::Auto,
        }
    }
}

/// A configuration value that is missing its constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Name of the offending setting (environment variable or field)
    pub field: &'static str,
    /// What is wrong and what is accepted
    pub message: String,
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigValidationError {}

impl Config {
    /// Builds a configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` beforehand to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigValidationError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary variable source.
    ///
    /// Unset or blank variables keep their defaults. The result is validated
    /// before it is returned.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigValidationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Config::default();

        if let Some(endpoint) = get(ENV_ENDPOINT) {
            config.endpoint = endpoint;
        }
        if let Some(fields) = get(ENV_FIELDS) {
            config.fields = fields;
        }
        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            config.timeout_seconds = parse_setting(ENV_TIMEOUT_SECS, &raw, "a whole number of seconds")?;
        }
        if let Some(raw) = get(ENV_MAX_CONCURRENCY) {
            let limit: usize = parse_setting(ENV_MAX_CONCURRENCY, &raw, "a non-negative integer")?;
            // 0 means no bound
            config.max_concurrency = (limit > 0).then_some(limit);
        }
        if let Some(raw) = get(ENV_LOG_LEVEL) {
            config.log_level =
                parse_setting(ENV_LOG_LEVEL, &raw, "one of error, warn, info, debug, trace")?;
        }
        if let Some(raw) = get(ENV_LOG_FORMAT) {
            config.log_format = parse_setting(ENV_LOG_FORMAT, &raw, "one of plain, json")?;
        }
        if let Some(raw) = get(ENV_COLOR) {
            config.color = parse_setting(ENV_COLOR, &raw, "one of auto, always, never")?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Checks the constraints that cannot be expressed in the field types.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError {
                field: ENV_TIMEOUT_SECS,
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }
        if !self.endpoint.contains(IP_PLACEHOLDER) {
            return Err(ConfigValidationError {
                field: ENV_ENDPOINT,
                message: format!("endpoint must contain the {IP_PLACEHOLDER} placeholder"),
            });
        }
        if self.fields.trim().is_empty() {
            return Err(ConfigValidationError {
                field: ENV_FIELDS,
                message: "field mask must not be empty".to_string(),
            });
        }
        match self.max_concurrency {
            Some(0) => {
                return Err(ConfigValidationError {
                    field: ENV_MAX_CONCURRENCY,
                    message: "concurrency bound must be greater than 0".to_string(),
                })
            }
            Some(limit) if limit > Semaphore::MAX_PERMITS => {
                return Err(ConfigValidationError {
                    field: ENV_MAX_CONCURRENCY,
                    message: format!(
                        "concurrency bound {limit} exceeds the maximum of {}",
                        Semaphore::MAX_PERMITS
                    ),
                })
            }
            _ => {}
        }
        Ok(())
    }
}

fn parse_setting<T: FromStr>(
    field: &'static str,
    raw: &str,
    expected: &str,
) -> Result<T, ConfigValidationError> {
    raw.parse().map_err(|_| ConfigValidationError {
        field,
        message: format!("invalid value '{raw}', expected {expected}"),
    })
}
