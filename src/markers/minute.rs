//! 1-minute mode — 90-minute blocks from session start, each split into four
//! equal segments.
//!
//! Segment length is the floor of block/4 (1,350,000 ms, 22.5 minutes); the
//! segment index clamps to 3 so the block's trailing remainder stays in the
//! last segment.

use super::{utc_day_of, MarkerBucket, BLOCK_MS};

const SEGMENTS: i64 = 4;
const SEGMENT_MS: i64 = BLOCK_MS / SEGMENTS;

pub(crate) fn decide(bar_ms: i64, session_start_ms: i64) -> (MarkerBucket, bool) {
    let block = (bar_ms - session_start_ms).div_euclid(BLOCK_MS);
    let block_start = session_start_ms + block * BLOCK_MS;
    let offset = (bar_ms - block_start).max(0);
    let segment = (offset / SEGMENT_MS).min(SEGMENTS - 1);

    let bucket = MarkerBucket::Segment {
        session_day: utc_day_of(session_start_ms),
        block,
        segment,
    };
    (bucket, segment == 0)
}
