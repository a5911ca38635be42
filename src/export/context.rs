//! Clock and timezone inputs for rendering.
//!
//! Renderers never read the system clock themselves; the driver captures the
//! current instant and local offset once and passes them down.

use std::fmt;

use chrono::{DateTime, FixedOffset, Local, Offset, Utc};
use chrono_tz::Tz;

/// Instant and local timezone a record is rendered against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    pub now: DateTime<Utc>,
    pub local_offset: FixedOffset,
}

impl RenderContext {
    pub fn new(now: DateTime<Utc>, local_offset: FixedOffset) -> Self {
        Self { now, local_offset }
    }

    /// Captures the system clock and local timezone.
    pub fn current() -> Self {
        let local = Local::now();
        Self {
            now: local.with_timezone(&Utc),
            local_offset: *local.offset(),
        }
    }

    /// UTC offset in seconds of the IANA zone `name` at `now`, DST included.
    /// `None` for names the timezone database does not know.
    pub fn zone_offset_seconds(&self, name: &str) -> Option<i64> {
        let zone: Tz = name.parse().ok()?;
        let offset = self.now.with_timezone(&zone).offset().fix();
        Some(i64::from(offset.local_minus_utc()))
    }

    /// How far a timezone with `remote_offset_secs` is from local time.
    pub fn relative_offset(&self, remote_offset_secs: i64) -> RelativeOffset {
        let local_secs = i64::from(self.local_offset.local_minus_utc());
        #[allow(clippy::cast_precision_loss)]
        let hours = (local_secs - remote_offset_secs) as f64 / 3600.0;
        let text = format_hours(hours.abs());
        if text == "0" {
            RelativeOffset::Same
        } else if hours > 0.0 {
            RelativeOffset::Behind(text)
        } else {
            RelativeOffset::Ahead(text)
        }
    }

    /// Current wall-clock time at `remote_offset_secs`, e.g.
    /// `October 19, 2026 at 3:04 PM`. `None` for offsets chrono rejects.
    pub fn local_time_at(&self, remote_offset_secs: i64) -> Option<String> {
        let secs = i32::try_from(remote_offset_secs).ok()?;
        let offset = FixedOffset::east_opt(secs)?;
        Some(
            self.now
                .with_timezone(&offset)
                .format("%B %-d, %Y at %-I:%M %p")
                .to_string(),
        )
    }
}

/// A remote timezone relative to local time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelativeOffset {
    Same,
    /// Remote clocks are behind local clocks by this many hours
    Behind(String),
    /// Remote clocks are ahead of local clocks by this many hours
    Ahead(String),
}

impl RelativeOffset {
    pub fn is_same(&self) -> bool {
        matches!(self, RelativeOffset::Same)
    }
}

impl fmt::Display for RelativeOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hours, direction) = match self {
            RelativeOffset::Same => return f.write_str("Same as local time"),
            RelativeOffset::Behind(hours) => (hours, "behind"),
            RelativeOffset::Ahead(hours) => (hours, "ahead"),
        };
        let plural = if hours == "1" { "" } else { "s" };
        write!(f, "{hours} hour{plural} {direction}")
    }
}

/// One decimal place with trailing zeros trimmed: `5.5`, `3`, `0`.
fn format_hours(hours: f64) -> String {
    let fixed = format!("{hours:.1}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn context(local_offset_secs: i32) -> RenderContext {
        RenderContext::new(
            Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap(),
            FixedOffset::east_opt(local_offset_secs).unwrap(),
        )
    }

    #[test]
    fn test_format_hours_trims_zeros() {
        assert_eq!(format_hours(5.5), "5.5");
        assert_eq!(format_hours(3.0), "3");
        assert_eq!(format_hours(10.0), "10");
        assert_eq!(format_hours(0.0), "0");
        assert_eq!(format_hours(0.04), "0");
        assert_eq!(format_hours(5.75), "5.8");
    }

    #[test]
    fn test_same_offset() {
        let ctx = context(3600);
        let rel = ctx.relative_offset(3600);
        assert!(rel.is_same());
        assert_eq!(rel.to_string(), "Same as local time");
    }

    #[test]
    fn test_half_hour_offset_behind() {
        // Local is UTC+5:30, remote is UTC
        let ctx = context(19_800);
        let rel = ctx.relative_offset(0);
        assert_eq!(rel, RelativeOffset::Behind("5.5".into()));
        assert_eq!(rel.to_string(), "5.5 hours behind");
    }

    #[test]
    fn test_single_hour_is_singular() {
        let ctx = context(0);
        assert_eq!(ctx.relative_offset(-3600).to_string(), "1 hour behind");
        assert_eq!(ctx.relative_offset(3600).to_string(), "1 hour ahead");
    }

    #[test]
    fn test_remote_ahead() {
        let ctx = context(-18_000);
        assert_eq!(ctx.relative_offset(32_400).to_string(), "14 hours ahead");
    }

    #[test]
    fn test_local_time_at_remote_offset() {
        let ctx = context(0);
        assert_eq!(
            ctx.local_time_at(19_800).as_deref(),
            Some("October 19, 2026 at 5:30 PM")
        );
        assert_eq!(
            ctx.local_time_at(-25_200).as_deref(),
            Some("October 19, 2026 at 5:00 AM")
        );
    }

    #[test]
    fn test_zone_offset_follows_daylight_saving() {
        let ctx = context(0);
        // 2026-10-19 is still daylight time in New York
        assert_eq!(ctx.zone_offset_seconds("America/New_York"), Some(-14_400));
        assert_eq!(ctx.zone_offset_seconds("Asia/Kolkata"), Some(19_800));

        let winter = RenderContext::new(
            Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap(),
            FixedOffset::east_opt(0).unwrap(),
        );
        assert_eq!(winter.zone_offset_seconds("America/New_York"), Some(-18_000));
    }

    #[test]
    fn test_unknown_zone_has_no_offset() {
        let ctx = context(0);
        assert_eq!(ctx.zone_offset_seconds("Mars/Olympus_Mons"), None);
        assert_eq!(ctx.zone_offset_seconds(""), None);
    }

    #[test]
    fn test_local_time_rejects_out_of_range_offset() {
        assert_eq!(context(0).local_time_at(200_000), None);
    }
}
