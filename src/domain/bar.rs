//! Bar — the fundamental market data unit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Intraday OHLCV bar with a millisecond-resolution timestamp.
///
/// A NaN price field means "value missing": such a bar still advances the
/// stream (timeframe detection, session rebuilds) but contributes nothing to
/// high/low accumulators, and a NaN close yields a zero marker base.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl Bar {
    /// Returns true if any price field is NaN (void bar).
    pub fn is_void(&self) -> bool {
        self.open.is_nan() || self.high.is_nan() || self.low.is_nan() || self.close.is_nan()
    }

    /// Basic OHLC sanity check: high >= low, both bracket open and close.
    pub fn is_sane(&self) -> bool {
        if self.is_void() {
            return false;
        }
        self.high >= self.low
            && self.high >= self.open
            && self.high >= self.close
            && self.low <= self.open
            && self.low <= self.close
    }
}

/// Read access to the bar fields the classifier needs.
///
/// The host platform exposes prices either as plain fields or zero-argument
/// accessors; this trait is the single typed boundary for both, so the core
/// only ever sees a timestamp and plain numeric values. Return NaN for a
/// missing value.
pub trait BarRead {
    fn timestamp(&self) -> DateTime<Utc>;
    fn high(&self) -> f64;
    fn low(&self) -> f64;
    fn close(&self) -> f64;
}

impl BarRead for Bar {
    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn high(&self) -> f64 {
        self.high
    }

    fn low(&self) -> f64 {
        self.low
    }

    fn close(&self) -> f64 {
        self.close
    }
}
