//! Output formats.
//!
//! Each `OutputFormat` is a pure rendering function from one `GeoRecord` to
//! text. The set of variants is the registry that `-format=<name>` is checked
//! against.

mod context;
mod csv;
mod json;
mod pretty;
mod table;

use serde_json::Value;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::geoip::GeoRecord;

pub use context::{RelativeOffset, RenderContext};
pub use table::Table;

/// Registered output formats, in the order they are listed to users.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, AsRefStr,
    IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON of every field
    Json,
    /// Header row and value row
    Csv,
    /// `key: value` per line
    Newline,
    /// Table for successful lookups, one explanatory line for failed ones
    #[default]
    Pretty,
}

impl OutputFormat {
    /// Looks up a registered format by its exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    pub fn render(&self, record: &GeoRecord, ctx: &RenderContext) -> String {
        match self {
            OutputFormat::Json => json::render_json(record),
            OutputFormat::Csv => csv::render_csv(record),
            OutputFormat::Newline => csv::render_newline(record),
            OutputFormat::Pretty => pretty::render_pretty(record, ctx),
        }
    }
}

/// Names of all registered formats.
pub fn format_names() -> Vec<&'static str> {
    OutputFormat::iter().map(Into::into).collect()
}

/// Text form of a field value for the flat formats.
///
/// Strings are written without quotes, `null` as nothing, and nested values
/// as compact JSON.
pub(crate) fn plain_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
