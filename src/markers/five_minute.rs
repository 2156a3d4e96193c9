//! 5-minute mode — 90-minute blocks only, no sub-segmentation.
//!
//! The "first" flag marks blocks whose start sits on the six-hour cadence
//! offset by three hours in the session timezone (03:00, 09:00, 15:00,
//! 21:00 local), independent of block index.

use chrono::{DateTime, Timelike};
use chrono_tz::Tz;

use super::{utc_day_of, MarkerBucket, BLOCK_MS};

pub(crate) fn decide(bar_ms: i64, session_start_ms: i64, session_tz: Tz) -> (MarkerBucket, bool) {
    let block = (bar_ms - session_start_ms).div_euclid(BLOCK_MS);
    let block_start_ms = session_start_ms + block * BLOCK_MS;

    let first = DateTime::from_timestamp_millis(block_start_ms)
        .map(|dt| {
            let local = dt.with_timezone(&session_tz);
            local.minute() == 0 && local.hour() % 6 == 3
        })
        .unwrap_or(false);

    let bucket = MarkerBucket::Block {
        session_day: utc_day_of(session_start_ms),
        block,
    };
    (bucket, first)
}
