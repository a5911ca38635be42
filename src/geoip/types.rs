//! GeoIP data structures.
//!
//! This module defines the record returned by the geolocation API and typed
//! views over its fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Outcome reported by the API in the `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStatus {
    Success,
    Fail,
}

/// Why the API could not locate an address (`message` on `status: fail`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    PrivateRange,
    ReservedRange,
    InvalidQuery,
    /// Any message outside the documented set
    Other(String),
}

impl FailureReason {
    pub fn from_message(message: &str) -> Self {
        match message {
            "private range" => FailureReason::PrivateRange,
            "reserved range" => FailureReason::ReservedRange,
            "invalid query" => FailureReason::InvalidQuery,
            other => FailureReason::Other(other.to_string()),
        }
    }

    /// Human-readable explanation. Unknown reasons are passed through as-is.
    pub fn explanation(&self) -> &str {
        match self {
            FailureReason::PrivateRange => "IP is in the private range",
            FailureReason::ReservedRange => "IP is in the reserved range",
            FailureReason::InvalidQuery => "Invalid IP address",
            FailureReason::Other(message) => message,
        }
    }
}

/// Classification derived from the `hosting`, `mobile` and `proxy` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpType {
    Hosting,
    Mobile,
    Proxy,
    Normal,
}

impl IpType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IpType::Hosting => "Hosting",
            IpType::Mobile => "Mobile",
            IpType::Proxy => "Proxy",
            IpType::Normal => "Normal",
        }
    }
}

/// One geolocation answer.
///
/// The record keeps every field the API returned, in the order it returned
/// them, so dump formats can reproduce the response faithfully. Accessors
/// return empty strings or `false` for fields that are absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeoRecord {
    fields: Map<String, Value>,
}

impl GeoRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// All fields in response order.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// String field, or `""` when absent or not a string.
    pub fn text(&self, key: &str) -> &str {
        self.fields.get(key).and_then(Value::as_str).unwrap_or("")
    }

    /// Boolean field, `false` when absent.
    pub fn flag(&self, key: &str) -> bool {
        self.fields
            .get(key)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    pub fn status(&self) -> LookupStatus {
        match self.text("status") {
            "fail" => LookupStatus::Fail,
            _ => LookupStatus::Success,
        }
    }

    /// Present only on `fail` records.
    pub fn failure_reason(&self) -> Option<FailureReason> {
        if self.status() != LookupStatus::Fail {
            return None;
        }
        self.fields
            .get("message")
            .and_then(Value::as_str)
            .map(FailureReason::from_message)
    }

    /// The address the API answered for.
    pub fn query(&self) -> &str {
        self.text("query")
    }

    /// UTC offset of the record's timezone in seconds, including DST.
    pub fn utc_offset_seconds(&self) -> Option<i64> {
        self.fields.get("offset").and_then(Value::as_i64)
    }

    /// Hosting takes priority over Mobile, which takes priority over Proxy.
    pub fn ip_type(&self) -> IpType {
        if self.flag("hosting") {
            IpType::Hosting
        } else if self.flag("mobile") {
            IpType::Mobile
        } else if self.flag("proxy") {
            IpType::Proxy
        } else {
            IpType::Normal
        }
    }
}

impl From<Map<String, Value>> for GeoRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}
