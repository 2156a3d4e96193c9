//! Per-bar output record — marker decision merged with the named-session
//! snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::{NamedSession, SessionName};

/// A fired quarter marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Anchor price for the marker, the bar's close (0.0 when absent).
    pub base: f64,
    /// True when this marker opens a larger structural boundary: a new
    /// block (1m), the six-hour cadence (5m), NY 18:00 (15m), or the
    /// four-occurrence cycle (1h).
    pub first_segment: bool,
}

/// Snapshot of one named session for output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionLevels {
    pub name: SessionName,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl From<&NamedSession> for SessionLevels {
    fn from(s: &NamedSession) -> Self {
        Self {
            name: s.name,
            high: s.high,
            low: s.low,
            start: s.start,
            end: s.end,
        }
    }
}

/// The record produced for every bar.
///
/// `sessions` is populated on every bar once the first daily build has
/// happened, in or out of the outer window and with or without a marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarOutput {
    pub marker: Option<Marker>,
    pub sessions: Vec<SessionLevels>,
}

impl BarOutput {
    pub fn is_marker(&self) -> bool {
        self.marker.is_some()
    }

    pub fn session(&self, name: SessionName) -> Option<&SessionLevels> {
        self.sessions.iter().find(|s| s.name == name)
    }
}
