// Temperature domain models
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A user-selected window of time. `start <= end` is expected but never enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }
}

/// One reading as delivered by the data source.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawReading {
    pub date: String,
    pub temperature: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperaturePoint {
    pub timestamp: DateTime<Utc>,
    pub temperature: f64,
}

impl TemperaturePoint {
    pub fn new(timestamp: DateTime<Utc>, temperature: f64) -> Self {
        Self {
            timestamp,
            temperature,
        }
    }
}

impl TryFrom<RawReading> for TemperaturePoint {
    type Error = TimestampError;

    fn try_from(raw: RawReading) -> Result<Self, Self::Error> {
        Ok(Self::new(parse_timestamp(&raw.date)?, raw.temperature))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimestampError {
    #[error("timestamp {input:?} has no numeric {field} component")]
    MissingComponent { input: String, field: &'static str },

    #[error("timestamp {input:?} is outside the representable range")]
    OutOfRange { input: String },
}

const FIELDS: [&str; 7] = [
    "year", "month", "day", "hour", "minute", "second", "fraction",
];

/// Parse a date string by splitting it on every run of non-digit characters.
///
/// The first seven groups are read as `[year, month, day, hour, minute, second,
/// millis]`. Each group is taken literally whatever its width, so `".5"` is five
/// milliseconds. Values past a unit's range carry into the next unit (month 13 is
/// January of the following year).
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, TimestampError> {
    let mut groups = input.split(|c: char| !c.is_ascii_digit());
    let mut values = [0i64; 7];

    for (slot, field) in values.iter_mut().zip(FIELDS) {
        let missing = || TimestampError::MissingComponent {
            input: input.to_string(),
            field,
        };
        // consecutive separators collapse into one, except at the very start
        let group = loop {
            match groups.next() {
                Some("") if field != "year" => continue,
                Some(group) => break group,
                None => return Err(missing()),
            }
        };
        *slot = group.parse().map_err(|_| missing())?;
    }

    let [year, month, day, hour, minute, second, millis] = values;
    utc_from_fields(year, month - 1, day, hour, minute, second, millis).ok_or_else(|| {
        TimestampError::OutOfRange {
            input: input.to_string(),
        }
    })
}

/// Build an instant from calendar fields with a zero-based month, letting every
/// field overflow into the next larger unit.
fn utc_from_fields(
    year: i64,
    month0: i64,
    day: i64,
    hour: i64,
    minute: i64,
    second: i64,
    millis: i64,
) -> Option<DateTime<Utc>> {
    let year = year.checked_add(month0.div_euclid(12))?;
    let month = month0.rem_euclid(12) + 1;
    let first_of_month = Utc
        .with_ymd_and_hms(i32::try_from(year).ok()?, month as u32, 1, 0, 0, 0)
        .single()?;

    let days = day.checked_sub(1)?;
    let offset_ms = days
        .checked_mul(24)?
        .checked_add(hour)?
        .checked_mul(60)?
        .checked_add(minute)?
        .checked_mul(60)?
        .checked_add(second)?
        .checked_mul(1000)?
        .checked_add(millis)?;

    DateTime::from_timestamp_millis(first_of_month.timestamp_millis().checked_add(offset_ms)?)
}
