//! Error type definitions.
//!
//! This module defines the error taxonomy of a lookup run, from argument
//! parsing through output, plus initialization failures.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::config::ConfigValidationError;
use crate::export::format_names;

use super::categorization::categorize_reqwest_error;

/// Exit code for successful runs, including help and version output.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for lookup, initialization and output failures.
pub const EXIT_FAILURE: i32 = 1;
/// Exit code for malformed arguments and failed validation.
pub const EXIT_USAGE: i32 = 2;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Invalid configuration in the environment.
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigValidationError),
}

/// A command-line token that could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// A flag whose name is not in the alias table. Holds the full token.
    #[error("Unrecognized flag '{0}'")]
    UnknownFlag(String),

    /// A positional token that is not an IPv4 address with optional port.
    #[error("Invalid IP '{0}'")]
    InvalidTarget(String),
}

/// Parsed arguments that do not form a runnable invocation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `-format=<name>` with a name that is not registered.
    #[error("Unrecognized format type '{0}'")]
    UnknownFormat(String),

    /// `-format` without a value.
    #[error("Format type not specified")]
    MissingFormatValue,

    /// No IP address was given.
    #[error("Please specify at least one IP address")]
    NoTargets,
}

/// A lookup that did not produce a record.
///
/// Every variant names the target it was issued for. An API answer with
/// `status: fail` is not a `LookupError`; it is a regular record.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Connection, timeout or body transfer failure.
    #[error("Failed to look up '{target}'")]
    Network {
        target: String,
        #[source]
        source: ReqwestError,
    },

    /// The API answered with a non-success HTTP status.
    #[error("Failed to look up '{target}': API responded with HTTP {status}")]
    Status {
        target: String,
        status: reqwest::StatusCode,
    },

    /// The response body was not a JSON object.
    #[error("Unreadable response for '{target}'")]
    Parse {
        target: String,
        #[source]
        source: serde_json::Error,
    },

    /// The lookup task panicked or was cancelled.
    #[error("Lookup task for '{target}' did not complete: {message}")]
    Task { target: String, message: String },
}

impl LookupError {
    /// The target this lookup was issued for.
    pub fn target(&self) -> &str {
        match self {
            LookupError::Network { target, .. }
            | LookupError::Status { target, .. }
            | LookupError::Parse { target, .. }
            | LookupError::Task { target, .. } => target,
        }
    }

    /// Category used for logging and statistics.
    pub fn error_type(&self) -> ErrorType {
        match self {
            LookupError::Network { source, .. } => categorize_reqwest_error(source),
            LookupError::Status { .. } => ErrorType::HttpStatusError,
            LookupError::Parse { .. } => ErrorType::ResponseParseError,
            LookupError::Task { .. } => ErrorType::TaskError,
        }
    }
}

/// Top-level error returned by `execute` and handled once in `main`.
#[derive(Error, Debug)]
pub enum WhoipError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Initialization(#[from] InitializationError),

    /// Writing results to stdout failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl WhoipError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            WhoipError::Argument(_) | WhoipError::Validation(_) => EXIT_USAGE,
            WhoipError::Lookup(_) | WhoipError::Initialization(_) | WhoipError::Output(_) => {
                EXIT_FAILURE
            }
        }
    }

    /// Optional second line printed under the `ERROR:` line.
    pub fn detail(&self) -> Option<String> {
        match self {
            WhoipError::Validation(
                ValidationError::UnknownFormat(_) | ValidationError::MissingFormatValue,
            ) => Some(format!("Try one of: {}", format_names().join(", "))),
            WhoipError::Lookup(LookupError::Network { source, .. }) => Some(format!(
                "{}: {}",
                categorize_reqwest_error(source),
                source
            )),
            WhoipError::Lookup(LookupError::Parse { source, .. }) => Some(source.to_string()),
            _ => None,
        }
    }
}

/// Categories of lookup failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(clippy::enum_variant_names)]
pub enum ErrorType {
    // HTTP/Network errors
    HttpRequestBuilderError,
    HttpRequestTimeoutError,
    HttpRequestConnectError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    HttpStatusError,
    // Response errors
    ResponseParseError,
    // Runtime errors
    TaskError,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::HttpStatusError => "HTTP status error",
            ErrorType::ResponseParseError => "Response parse error",
            ErrorType::TaskError => "Lookup task error",
        }
    }
}
