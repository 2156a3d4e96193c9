//! Quarter markers — the mode-dispatched decision that partitions a session
//! into blocks and segments.
//!
//! Every mode computes a bucket identity for the bar; a marker fires only
//! when that identity differs from the last one emitted. Mode changes and
//! session exits clear the stored identity so the first qualifying bar after
//! a discontinuity is not suppressed as a stale duplicate.

pub mod fifteen_minute;
pub mod five_minute;
pub mod hourly;
pub mod minute;

use chrono::{DateTime, NaiveDate, Timelike};
use chrono_tz::Tz;

use crate::timeframe::TimeframeMode;

/// Length of one block in the minute-resolution modes.
pub const BLOCK_MS: i64 = 90 * 60 * 1000;

/// What a fired marker belongs to. Equality is the de-duplication contract:
/// the same bucket never fires twice while the marker state is unbroken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerBucket {
    /// 1-minute mode: one of four segments inside a 90-minute block.
    Segment {
        session_day: NaiveDate,
        block: i64,
        segment: i64,
    },
    /// 5-minute mode: a 90-minute block, no sub-segmentation.
    Block { session_day: NaiveDate, block: i64 },
    /// 15-minute mode: a six-hour New York boundary, keyed by the
    /// minute-truncated instant.
    SixHour { minute: i64 },
    /// 1-hour mode: an 18:00 New York bar, keyed the same way.
    DailyOpen { minute: i64 },
}

/// A fired marker decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerFire {
    pub first_segment: bool,
}

/// De-duplication state plus the 1-hour mode's occurrence counter.
///
/// The counter is stream-anchored: it survives mode changes and session
/// exits, so the every-fourth-18:00 cycle counts from the first qualifying
/// bar the stream ever saw.
#[derive(Debug, Clone, Default)]
pub struct MarkerState {
    last_bucket: Option<MarkerBucket>,
    last_mode: Option<TimeframeMode>,
    ny_open_count: u32,
}

impl MarkerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session exit: forget the last bucket and mode so re-entry starts
    /// cleanly. The 18:00 occurrence counter is deliberately untouched.
    pub fn reset(&mut self) {
        self.last_bucket = None;
        self.last_mode = None;
    }

    /// Decide marker emission for one in-session bar.
    pub fn on_bar(
        &mut self,
        mode: TimeframeMode,
        bar_ms: i64,
        session_start_ms: i64,
        session_tz: Tz,
    ) -> Option<MarkerFire> {
        if self.last_mode != Some(mode) {
            self.last_bucket = None;
            self.last_mode = Some(mode);
        }

        let decision = match mode {
            TimeframeMode::Unknown => None,
            TimeframeMode::OneMinute => Some(minute::decide(bar_ms, session_start_ms)),
            TimeframeMode::FiveMinute => {
                Some(five_minute::decide(bar_ms, session_start_ms, session_tz))
            }
            TimeframeMode::FifteenMinute => fifteen_minute::decide(bar_ms),
            TimeframeMode::OneHour => hourly::decide(bar_ms).map(|bucket| (bucket, false)),
        };
        let (bucket, mut first_segment) = decision?;

        if self.last_bucket == Some(bucket) {
            return None;
        }
        self.last_bucket = Some(bucket);

        if mode == TimeframeMode::OneHour {
            self.ny_open_count += 1;
            first_segment = self.ny_open_count % 4 == 1;
        }

        Some(MarkerFire { first_segment })
    }
}

/// New York civil (hour, minute) for an instant, DST-aware.
pub(crate) fn ny_civil(bar_ms: i64) -> Option<(u32, u32)> {
    let ts = DateTime::from_timestamp_millis(bar_ms)?;
    let ny = ts.with_timezone(&chrono_tz::America::New_York);
    Some((ny.hour(), ny.minute()))
}

/// UTC calendar date of an instant, used as the session-day key in buckets.
pub(crate) fn utc_day_of(ms: i64) -> NaiveDate {
    DateTime::from_timestamp_millis(ms)
        .map(|dt| dt.date_naive())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ms(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> i64 {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
            .and_utc()
            .timestamp_millis()
    }

    #[test]
    fn same_bucket_fires_once() {
        let mut state = MarkerState::new();
        let start = ms(2024, 1, 15, 0, 0);
        let fire = state.on_bar(TimeframeMode::OneMinute, start, start, chrono_tz::UTC);
        assert_eq!(fire, Some(MarkerFire { first_segment: true }));
        // Next bar in the same segment: suppressed.
        let again = state.on_bar(
            TimeframeMode::OneMinute,
            start + 60_000,
            start,
            chrono_tz::UTC,
        );
        assert_eq!(again, None);
    }

    #[test]
    fn mode_change_clears_the_bucket() {
        let mut state = MarkerState::new();
        let start = ms(2024, 1, 15, 0, 0);
        assert!(state
            .on_bar(TimeframeMode::OneMinute, start, start, chrono_tz::UTC)
            .is_some());
        // Hold the same instant but switch modes; 5m computes a different
        // bucket type, fires, and re-arms.
        assert!(state
            .on_bar(TimeframeMode::FiveMinute, start, start, chrono_tz::UTC)
            .is_some());
        // Back to 1m: the identical pre-switch bucket fires again because
        // the mode change cleared it.
        assert!(state
            .on_bar(TimeframeMode::OneMinute, start, start, chrono_tz::UTC)
            .is_some());
    }

    #[test]
    fn reset_permits_immediate_reemission() {
        let mut state = MarkerState::new();
        let start = ms(2024, 1, 15, 0, 0);
        assert!(state
            .on_bar(TimeframeMode::OneMinute, start, start, chrono_tz::UTC)
            .is_some());
        state.reset();
        assert!(state
            .on_bar(TimeframeMode::OneMinute, start, start, chrono_tz::UTC)
            .is_some());
    }

    #[test]
    fn unknown_mode_never_fires() {
        let mut state = MarkerState::new();
        let start = ms(2024, 1, 15, 0, 0);
        assert_eq!(
            state.on_bar(TimeframeMode::Unknown, start, start, chrono_tz::UTC),
            None
        );
    }

    #[test]
    fn hourly_counter_survives_reset() {
        let mut state = MarkerState::new();
        // 2024-01-15 23:00 UTC = 18:00 EST.
        let first = state.on_bar(
            TimeframeMode::OneHour,
            ms(2024, 1, 15, 23, 0),
            ms(2024, 1, 15, 0, 0),
            chrono_tz::UTC,
        );
        assert_eq!(first, Some(MarkerFire { first_segment: true }));

        state.reset();
        let second = state.on_bar(
            TimeframeMode::OneHour,
            ms(2024, 1, 16, 23, 0),
            ms(2024, 1, 16, 0, 0),
            chrono_tz::UTC,
        );
        // Counter kept counting: occurrence 2 is not a cycle start.
        assert_eq!(second, Some(MarkerFire { first_segment: false }));
    }

    #[test]
    fn ny_civil_tracks_dst() {
        // Winter: 23:00 UTC = 18:00 EST.
        assert_eq!(ny_civil(ms(2024, 1, 15, 23, 0)), Some((18, 0)));
        // Summer: 22:00 UTC = 18:00 EDT.
        assert_eq!(ny_civil(ms(2024, 7, 15, 22, 0)), Some((18, 0)));
    }
}
