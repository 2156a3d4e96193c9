//! Timeframe detection — infers the nominal bar interval from timestamp deltas.
//!
//! The frame length is captured from the FIRST observed inter-bar delta and
//! never re-estimated; later deltas (gaps, provider hiccups) do not refine it.
//! An interval outside every tolerance band classifies as `Unknown`, which
//! suppresses marker emission without error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const ONE_MINUTE_MS: i64 = 60 * 1000;
const FIVE_MINUTE_MS: i64 = 5 * ONE_MINUTE_MS;
const FIFTEEN_MINUTE_MS: i64 = 15 * ONE_MINUTE_MS;
const ONE_HOUR_MS: i64 = 60 * ONE_MINUTE_MS;

// Tolerance bands around the canonical interval lengths.
const TOLERANCE_1M_MS: i64 = 2_000;
const TOLERANCE_5M_MS: i64 = 5_000;
const TOLERANCE_15M_MS: i64 = 7_000;
const TOLERANCE_1H_MS: i64 = 20_000;

/// Detected nominal bar sampling interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeframeMode {
    Unknown,
    OneMinute,
    FiveMinute,
    FifteenMinute,
    OneHour,
}

impl TimeframeMode {
    /// Classify a frame length in milliseconds into a mode.
    pub fn classify(frame_ms: i64) -> Self {
        if (frame_ms - ONE_MINUTE_MS).abs() <= TOLERANCE_1M_MS {
            Self::OneMinute
        } else if (frame_ms - FIVE_MINUTE_MS).abs() <= TOLERANCE_5M_MS {
            Self::FiveMinute
        } else if (frame_ms - FIFTEEN_MINUTE_MS).abs() <= TOLERANCE_15M_MS {
            Self::FifteenMinute
        } else if (frame_ms - ONE_HOUR_MS).abs() <= TOLERANCE_1H_MS {
            Self::OneHour
        } else {
            Self::Unknown
        }
    }
}

/// Captures the frame length from the first inter-bar delta.
#[derive(Debug, Clone, Default)]
pub struct TimeframeDetector {
    previous_ts: Option<i64>,
    frame_ms: Option<i64>,
}

impl TimeframeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a bar timestamp. The first call only primes `previous_ts`;
    /// the second call locks the frame length permanently.
    pub fn observe(&mut self, timestamp: DateTime<Utc>) {
        let ts = timestamp.timestamp_millis();
        if let Some(prev) = self.previous_ts {
            if self.frame_ms.is_none() {
                self.frame_ms = Some(ts - prev);
            }
        }
        self.previous_ts = Some(ts);
    }

    /// Frame length in milliseconds, if captured.
    pub fn frame_ms(&self) -> Option<i64> {
        self.frame_ms
    }

    /// Current mode. `Unknown` until a frame length has been captured.
    pub fn mode(&self) -> TimeframeMode {
        match self.frame_ms {
            Some(frame) => TimeframeMode::classify(frame),
            None => TimeframeMode::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(ms).unwrap()
    }

    #[test]
    fn classify_canonical_intervals() {
        assert_eq!(TimeframeMode::classify(60_000), TimeframeMode::OneMinute);
        assert_eq!(TimeframeMode::classify(300_000), TimeframeMode::FiveMinute);
        assert_eq!(
            TimeframeMode::classify(900_000),
            TimeframeMode::FifteenMinute
        );
        assert_eq!(TimeframeMode::classify(3_600_000), TimeframeMode::OneHour);
    }

    #[test]
    fn classify_within_tolerance_bands() {
        assert_eq!(TimeframeMode::classify(61_999), TimeframeMode::OneMinute);
        assert_eq!(TimeframeMode::classify(58_001), TimeframeMode::OneMinute);
        assert_eq!(TimeframeMode::classify(304_900), TimeframeMode::FiveMinute);
        assert_eq!(
            TimeframeMode::classify(907_000),
            TimeframeMode::FifteenMinute
        );
        assert_eq!(TimeframeMode::classify(3_619_999), TimeframeMode::OneHour);
    }

    #[test]
    fn classify_outside_bands_is_unknown() {
        assert_eq!(TimeframeMode::classify(62_001), TimeframeMode::Unknown);
        assert_eq!(TimeframeMode::classify(120_000), TimeframeMode::Unknown);
        assert_eq!(TimeframeMode::classify(86_400_000), TimeframeMode::Unknown);
    }

    #[test]
    fn mode_unknown_before_first_delta() {
        let mut det = TimeframeDetector::new();
        assert_eq!(det.mode(), TimeframeMode::Unknown);
        det.observe(ts(0));
        // One bar seen: still no delta.
        assert_eq!(det.mode(), TimeframeMode::Unknown);
        det.observe(ts(60_000));
        assert_eq!(det.mode(), TimeframeMode::OneMinute);
    }

    #[test]
    fn frame_locks_to_first_delta() {
        let mut det = TimeframeDetector::new();
        det.observe(ts(0));
        det.observe(ts(60_000));
        assert_eq!(det.frame_ms(), Some(60_000));

        // Later deltas (a gap, then 5-minute spacing) never re-estimate.
        det.observe(ts(7_260_000));
        det.observe(ts(7_560_000));
        assert_eq!(det.frame_ms(), Some(60_000));
        assert_eq!(det.mode(), TimeframeMode::OneMinute);
    }

    #[test]
    fn gap_as_first_delta_pins_unknown() {
        let mut det = TimeframeDetector::new();
        det.observe(ts(0));
        det.observe(ts(172_800_000)); // weekend-sized first delta
        det.observe(ts(172_860_000)); // clean 1m spacing afterwards
        assert_eq!(det.mode(), TimeframeMode::Unknown);
    }
}
