//! Human-oriented rendering.
//!
//! Successful lookups become a two-column table; failed ones become a single
//! red line explaining why the address could not be located.

use colored::Colorize;

use super::context::RenderContext;
use super::plain_value;
use super::table::Table;
use crate::geoip::{GeoRecord, LookupStatus};

/// Explanation used when a `fail` record carries no `message`.
const UNKNOWN_REASON: &str = "unknown reason";

pub fn render_pretty(record: &GeoRecord, ctx: &RenderContext) -> String {
    match record.status() {
        LookupStatus::Fail => render_failure(record),
        LookupStatus::Success => build_table(record, ctx).render(),
    }
}

fn render_failure(record: &GeoRecord) -> String {
    let reason = record.failure_reason();
    let explanation = reason
        .as_ref()
        .map(|reason| reason.explanation())
        .unwrap_or(UNKNOWN_REASON);
    format!("Failed to locate '{}': {}", record.query(), explanation)
        .as_str()
        .red()
        .to_string()
}

fn build_table(record: &GeoRecord, ctx: &RenderContext) -> Table {
    let mut table = Table::new("Field Name", "Value");

    table.push("City", record.text("city"));
    let district = record.text("district");
    if !district.is_empty() {
        table.push("District", district);
    }
    table.push("Region", record.text("regionName"));
    table.push("ZIP Code", record.text("zip"));

    table.push(
        "Country",
        format!("{} ({})", record.text("country"), record.text("countryCode")),
    );
    table.push("Continent", record.text("continent"));

    table.push("Latitude", field(record, "lat"));
    table.push("Longitude", field(record, "lon"));

    table.push("Timezone", record.text("timezone"));
    // The numeric field wins; the zone name covers field masks without it
    let remote_offset = record
        .utc_offset_seconds()
        .or_else(|| ctx.zone_offset_seconds(record.text("timezone")));
    if let Some(remote_offset) = remote_offset {
        let relative = ctx.relative_offset(remote_offset);
        table.push("Offset", relative.to_string());
        if !relative.is_same() {
            if let Some(time) = ctx.local_time_at(remote_offset) {
                table.push("Time", time);
            }
        }
    }

    table.push("Currency", record.text("currency"));
    table.push("", "");
    table.push("ISP", record.text("isp"));
    table.push("IP Type", record.ip_type().as_str());
    let org = record.text("org");
    if !org.is_empty() {
        table.push("Organization", org);
    }

    table
}

fn field(record: &GeoRecord, key: &str) -> String {
    record.get(key).map(plain_value).unwrap_or_default()
}
