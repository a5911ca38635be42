//! CSV and newline-delimited rendering.
//!
//! Both formats dump every field in response order. CSV output is a header
//! row and a value row with no quoting: a value containing a comma shifts
//! the columns that follow it.

use crate::geoip::GeoRecord;

use super::plain_value;

/// Header row of field names, then one row of values.
pub fn render_csv(record: &GeoRecord) -> String {
    let header: Vec<&str> = record.fields().keys().map(String::as_str).collect();
    let values: Vec<String> = record.fields().values().map(plain_value).collect();
    format!("{}\n{}", header.join(","), values.join(","))
}

/// One `key: value` line per field.
pub fn render_newline(record: &GeoRecord) -> String {
    record
        .fields()
        .iter()
        .map(|(key, value)| format!("{key}: {}", plain_value(value)))
        .collect::<Vec<_>>()
        .join("\n")
}
