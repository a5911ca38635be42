//! Error categorization.
//!
//! This module maps transport errors onto `ErrorType` so failures can be
//! logged and reported with a stable category.

use super::types::ErrorType;

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// HTTP status failures are reported separately (`LookupError::Status`), so
/// this only looks at the transport-level error kind.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::HttpRequestDecodeError
    } else if error.is_status() {
        ErrorType::HttpStatusError
    } else {
        ErrorType::HttpRequestOtherError
    }
}
