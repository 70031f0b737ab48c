//! Display formatting for timestamps shown on dashboard pages

use chrono::{
    DateTime, Duration, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc,
};
use std::fmt::Display;

/// Text shown in place of a timestamp that cannot be interpreted
pub const INVALID_DATE: &str = "Invalid Date";

const DATE_FORMAT: &str = "%-m/%-d/%Y";
const TIME_FORMAT: &str = "%-I:%M:%S %p";

/// Anything a page may hand over as a point in time.
///
/// Values with an explicit offset (epochs, RFC 3339 strings) name an instant.
/// Date-times without an offset are wall-clock times in whatever zone the value
/// gets rendered in. A bare date is midnight UTC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timestamp {
    Instant(DateTime<Utc>),
    WallClock(NaiveDateTime),
    Invalid,
}

impl Timestamp {
    /// Parse the textual forms the backend emits
    pub fn parse(input: &str) -> Self {
        let input = input.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
            return Timestamp::Instant(dt.with_timezone(&Utc));
        }
        if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
            return Timestamp::from(date);
        }
        for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(input, fmt) {
                return Timestamp::WallClock(naive);
            }
        }

        Timestamp::Invalid
    }

    /// Resolve to a concrete date-time in `tz`, or `None` when invalid
    pub fn in_zone<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        match self {
            Timestamp::Instant(dt) => Some(dt.with_timezone(tz)),
            Timestamp::WallClock(naive) => tz
                .from_local_datetime(naive)
                .earliest()
                // Wall-clock times inside a DST gap move forward past it
                .or_else(|| tz.from_local_datetime(&(*naive + Duration::hours(1))).earliest()),
            Timestamp::Invalid => None,
        }
    }
}

/// Milliseconds since the Unix epoch
impl From<i64> for Timestamp {
    fn from(millis: i64) -> Self {
        Utc.timestamp_millis_opt(millis)
            .single()
            .map(Timestamp::Instant)
            .unwrap_or(Timestamp::Invalid)
    }
}

impl From<&str> for Timestamp {
    fn from(input: &str) -> Self {
        Timestamp::parse(input)
    }
}

impl From<String> for Timestamp {
    fn from(input: String) -> Self {
        Timestamp::parse(&input)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp::Instant(dt)
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Timestamp::Instant(dt.with_timezone(&Utc))
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(naive: NaiveDateTime) -> Self {
        Timestamp::WallClock(naive)
    }
}

impl From<NaiveDate> for Timestamp {
    fn from(date: NaiveDate) -> Self {
        date.and_hms_opt(0, 0, 0)
            .map(|naive| Timestamp::Instant(Utc.from_utc_datetime(&naive)))
            .unwrap_or(Timestamp::Invalid)
    }
}

fn render<Tz>(timestamp: Timestamp, tz: &Tz, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match timestamp.in_zone(tz) {
        Some(dt) => dt.format(pattern).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Calendar date in the local timezone, e.g. `10/19/2026`
pub fn format_date(timestamp: impl Into<Timestamp>) -> String {
    format_date_in(timestamp, &Local)
}

/// Clock time in the local timezone, e.g. `3:04:05 PM`
pub fn format_time(timestamp: impl Into<Timestamp>) -> String {
    format_time_in(timestamp, &Local)
}

pub fn format_date_in<Tz>(timestamp: impl Into<Timestamp>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    render(timestamp.into(), tz, DATE_FORMAT)
}

pub fn format_time_in<Tz>(timestamp: impl Into<Timestamp>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    render(timestamp.into(), tz, TIME_FORMAT)
}
