// Range selector - the start/end instants the user picked
use crate::domain::temperature::TimeRange;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc};

const LAST_MILLISECOND_OF_DAY: i64 = 86_399_999;

#[derive(Debug, Clone)]
pub struct RangeSelector {
    range: TimeRange,
}

impl RangeSelector {
    /// Today from 00:00:00.000 to 23:59:59.999, local time.
    pub fn today() -> Self {
        Self::for_day(Local::now().date_naive(), &Local)
    }

    pub fn for_day<Tz: TimeZone>(day: NaiveDate, tz: &Tz) -> Self {
        let midnight = day.and_time(NaiveTime::MIN);
        let last_ms = midnight + TimeDelta::milliseconds(LAST_MILLISECOND_OF_DAY);
        Self {
            range: TimeRange::new(local_to_utc(midnight, tz), local_to_utc(last_ms, tz)),
        }
    }

    pub fn range(&self) -> TimeRange {
        self.range
    }

    /// Replace the start bound. The end bound is not consulted.
    pub fn set_start(&mut self, start: DateTime<Utc>) {
        self.range.start = start;
    }

    pub fn set_end(&mut self, end: DateTime<Utc>) {
        self.range.end = end;
    }
}

impl Default for RangeSelector {
    fn default() -> Self {
        Self::today()
    }
}

// Wall-clock times skipped by a DST jump fall back to their UTC reading.
fn local_to_utc<Tz: TimeZone>(naive: NaiveDateTime, tz: &Tz) -> DateTime<Utc> {
    match tz.from_local_datetime(&naive).earliest() {
        Some(local) => local.with_timezone(&Utc),
        None => naive.and_utc(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    #[test]
    fn test_day_bounds_in_utc() {
        let selector = RangeSelector::for_day(day(), &Utc);
        let range = selector.range();
        assert_eq!(range.start.to_rfc3339(), "2024-03-05T00:00:00+00:00");
        assert_eq!(
            range.end.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            "2024-03-05T23:59:59.999Z"
        );
    }

    #[test]
    fn test_day_bounds_follow_local_offset() {
        let cet = FixedOffset::east_opt(3600).unwrap();
        let range = RangeSelector::for_day(day(), &cet).range();
        assert_eq!(
            range.start.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            "2024-03-04T23:00:00.000Z"
        );
        assert_eq!(
            range.end.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            "2024-03-05T22:59:59.999Z"
        );
    }

    #[test]
    fn test_bounds_replace_without_validation() {
        let mut selector = RangeSelector::for_day(day(), &Utc);
        let later = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        selector.set_start(later);
        let range = selector.range();
        assert_eq!(range.start, later);
        assert!(range.start > range.end);

        let earlier = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        selector.set_end(earlier);
        assert_eq!(selector.range().end, earlier);
        assert_eq!(selector.range().start, later);
    }
}
