//! Calendar-day and wall-clock derivation for message timestamps.
//!
//! Days are evaluated in a fixed UTC offset supplied by the caller so the same
//! snapshot always projects the same way, whatever the host timezone is.

use chrono::{DateTime, FixedOffset, NaiveDate};

fn local_datetime(timestamp_ms: i64, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    DateTime::from_timestamp_millis(timestamp_ms).map(|utc| utc.with_timezone(&offset))
}

/// Calendar day of the timestamp; out-of-range timestamps collapse to `NaiveDate::MIN`.
pub fn calendar_day(timestamp_ms: i64, offset: FixedOffset) -> NaiveDate {
    local_datetime(timestamp_ms, offset)
        .map(|dt| dt.date_naive())
        .unwrap_or(NaiveDate::MIN)
}

pub fn format_day(date: NaiveDate) -> String {
    // "14 Feb 2026"
    date.format("%-d %b %Y").to_string()
}

pub fn format_time(timestamp_ms: i64, offset: FixedOffset) -> String {
    match local_datetime(timestamp_ms, offset) {
        Some(dt) => dt.format("%H:%M").to_string(),
        None => "??:??".to_owned(),
    }
}

/// Whole minutes elapsed between two timestamps, rounded down.
pub fn gap_minutes(earlier_ms: i64, later_ms: i64) -> i64 {
    later_ms.saturating_sub(earlier_ms).div_euclid(60_000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{JAN_1_2024_10AM, MINUTE_MS};

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).expect("zero offset is valid")
    }

    #[test]
    fn calendar_day_respects_offset() {
        // 2024-01-01 23:30 UTC is already Jan 2 at +01:00.
        let late = JAN_1_2024_10AM + 13 * 60 * MINUTE_MS + 30 * MINUTE_MS;
        let plus_one = FixedOffset::east_opt(3_600).expect("valid offset");

        assert_eq!(
            calendar_day(late, utc()),
            NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date")
        );
        assert_eq!(
            calendar_day(late, plus_one),
            NaiveDate::from_ymd_opt(2024, 1, 2).expect("valid date")
        );
    }

    #[test]
    fn calendar_day_of_out_of_range_timestamp_is_min_date() {
        assert_eq!(calendar_day(i64::MAX, utc()), NaiveDate::MIN);
    }

    #[test]
    fn format_day_produces_short_month() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 14).expect("valid date");

        assert_eq!(format_day(date), "14 Feb 2026");
    }

    #[test]
    fn format_time_uses_offset_wall_clock() {
        assert_eq!(format_time(JAN_1_2024_10AM, utc()), "10:00");
        assert_eq!(format_time(i64::MAX, utc()), "??:??");
    }

    #[test]
    fn gap_minutes_rounds_down() {
        assert_eq!(gap_minutes(0, 2 * MINUTE_MS + 59_999), 2);
        assert_eq!(gap_minutes(0, 59_999), 0);
        assert_eq!(gap_minutes(0, 6 * MINUTE_MS), 6);
    }
}
