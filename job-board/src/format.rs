use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Offset, Utc};

/// Korea Standard Time, the zone `ko-KR` dates are read in
pub const KST_OFFSET_SECS: i32 = 9 * 3600;

pub const INVALID_DATE: &str = "Invalid Date";

/// Formats stored dates as long-form Korean calendar dates, e.g. `2024년 3월 5일`.
///
/// Timestamps carrying an offset are first moved into the display offset.
/// Timestamps without one and plain dates are taken as already local.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormatter {
    offset: FixedOffset,
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self {
            offset: FixedOffset::east_opt(KST_OFFSET_SECS).unwrap_or_else(|| Utc.fix()),
        }
    }
}

impl DateFormatter {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// `None` when the hours are outside of -23..=23
    pub fn from_utc_offset_hours(hours: i32) -> Option<Self> {
        hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .map(Self::new)
    }

    pub fn format(&self, raw: &str) -> String {
        match self.local_date(raw) {
            Some(date) => korean_long_date(date),
            None => {
                log::warn!("unparseable date value: '{}'", raw);
                INVALID_DATE.to_owned()
            }
        }
    }

    fn local_date(&self, raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
            return Some(timestamp.with_timezone(&self.offset).date_naive());
        }
        // postgres style, `2024-03-05 10:20:30.5+00`
        for pattern in ["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"] {
            if let Ok(timestamp) = DateTime::parse_from_str(raw, pattern) {
                return Some(timestamp.with_timezone(&self.offset).date_naive());
            }
        }
        for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, pattern) {
                return Some(timestamp.date());
            }
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }
}

pub fn korean_long_date(date: NaiveDate) -> String {
    format!("{}년 {}월 {}일", date.year(), date.month(), date.day())
}
