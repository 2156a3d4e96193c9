//! 1-hour mode — markers only at exactly 18:00 New York.
//!
//! The "first" flag is not decided here: `MarkerState` counts qualifying
//! occurrences and flags every fourth one, starting with the first ever seen.

use super::{ny_civil, MarkerBucket};

pub(crate) fn decide(bar_ms: i64) -> Option<MarkerBucket> {
    let (hour, minute) = ny_civil(bar_ms)?;
    if hour != 18 || minute != 0 {
        return None;
    }
    Some(MarkerBucket::DailyOpen {
        minute: bar_ms.div_euclid(60_000),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ms(mo: u32, d: u32, h: u32, mi: u32) -> i64 {
        NaiveDate::from_ymd_opt(2024, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
            .and_utc()
            .timestamp_millis()
    }

    #[test]
    fn fires_only_at_ny_eighteen_hundred() {
        // EST: NY 18:00 = 23:00 UTC.
        assert!(decide(ms(1, 15, 23, 0)).is_some());
        assert!(decide(ms(1, 15, 22, 0)).is_none()); // NY 17:00
        assert!(decide(ms(1, 15, 23, 30)).is_none()); // NY 18:30
        // EDT: NY 18:00 = 22:00 UTC.
        assert!(decide(ms(7, 15, 22, 0)).is_some());
        assert!(decide(ms(7, 15, 23, 0)).is_none()); // NY 19:00
    }

    #[test]
    fn distinct_days_get_distinct_buckets() {
        let a = decide(ms(1, 15, 23, 0)).unwrap();
        let b = decide(ms(1, 16, 23, 0)).unwrap();
        assert_ne!(a, b);
    }
}
