//! 15-minute mode — markers at the six-hour New York boundaries.
//!
//! The block/segment scheme does not apply here: a marker fires only when
//! the bar's New York civil time (DST-aware) is exactly 00:00, 06:00, 12:00,
//! or 18:00, and the 18:00 boundary is the "first" of the daily cycle.

use super::{ny_civil, MarkerBucket};

pub(crate) fn decide(bar_ms: i64) -> Option<(MarkerBucket, bool)> {
    let (hour, minute) = ny_civil(bar_ms)?;
    if minute != 0 || hour % 6 != 0 {
        return None;
    }
    let bucket = MarkerBucket::SixHour {
        minute: bar_ms.div_euclid(60_000),
    };
    Some((bucket, hour == 18))
}
