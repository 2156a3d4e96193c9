//! Outer session window — the instant interval during which marker emission
//! is active, anchored to the bar's civil day in the configured timezone.

use chrono::{DateTime, Duration, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::config::ClassifierConfig;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Active session interval for one civil day. End is inclusive: a bar at
/// exactly `end` is still in session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl SessionWindow {
    /// Build the window for the civil day containing `bar_ts`.
    ///
    /// Default: the full day, `[midnight, midnight + 24h]`. Custom: the
    /// configured start/end time-of-day; an end not strictly after the start
    /// wraps to the next day (overnight session). Hour/minute values past
    /// the usual ranges roll over into the following day rather than error.
    pub fn for_bar(bar_ts: DateTime<Utc>, config: &ClassifierConfig) -> Self {
        let tz = config.session_tz;
        let day = bar_ts.with_timezone(&tz).date_naive();
        let midnight = day.and_time(NaiveTime::MIN);

        let (start, end) = if config.use_custom_session {
            let start_offset =
                Duration::minutes(i64::from(config.start_hour) * 60 + i64::from(config.start_minute));
            let end_offset =
                Duration::minutes(i64::from(config.end_hour) * 60 + i64::from(config.end_minute));
            let start = resolve_civil(tz, midnight + start_offset);
            let mut end = resolve_civil(tz, midnight + end_offset);
            if end <= start {
                end += Duration::milliseconds(DAY_MS);
            }
            (start, end)
        } else {
            let start = resolve_civil(tz, midnight);
            (start, start + Duration::milliseconds(DAY_MS))
        };

        Self { start, end }
    }

    /// Inclusive containment check.
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        self.start <= ts && ts <= self.end
    }

    pub fn start_ms(&self) -> i64 {
        self.start.timestamp_millis()
    }
}

/// Resolve a civil time in `tz` to an instant, fail-soft.
///
/// Ambiguous times (DST fall-back) take the earliest instant; nonexistent
/// times (spring-forward gap) shift forward hour by hour until valid.
fn resolve_civil(tz: Tz, naive: NaiveDateTime) -> DateTime<Utc> {
    let mut candidate = naive;
    for _ in 0..4 {
        if let Some(dt) = tz.from_local_datetime(&candidate).earliest() {
            return dt.with_timezone(&Utc);
        }
        candidate += Duration::hours(1);
    }
    // No zone gaps run anywhere near this long; treat the time as UTC.
    naive.and_utc()
}
