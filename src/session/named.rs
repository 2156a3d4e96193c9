//! Named trading sessions — Sydney, Asia, London, New York — tracked on UTC
//! calendar days.
//!
//! All four sessions are rebuilt together exactly once per UTC day change;
//! rebuilding resets the high/low accumulators. Accumulation happens on every
//! bar regardless of the outer session window, but only for sessions whose
//! `[start, end)` interval contains the bar.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{ClassifierConfig, SessionOverride};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// One of the four fixed session identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionName {
    Sydney,
    Asia,
    London,
    NewYork,
}

impl SessionName {
    pub const ALL: [SessionName; 4] = [
        SessionName::Sydney,
        SessionName::Asia,
        SessionName::London,
        SessionName::NewYork,
    ];

    /// Default UTC window as (start_hour, start_minute, end_hour, end_minute).
    fn default_hours(self) -> (u32, u32, u32, u32) {
        match self {
            SessionName::Sydney => (22, 0, 7, 0),
            SessionName::Asia => (0, 0, 9, 0),
            SessionName::London => (8, 0, 17, 0),
            SessionName::NewYork => (13, 0, 22, 0),
        }
    }
}

impl std::fmt::Display for SessionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SessionName::Sydney => "Sydney",
            SessionName::Asia => "Asia",
            SessionName::London => "London",
            SessionName::NewYork => "NY",
        };
        f.write_str(s)
    }
}

/// One named session's window and accumulators for the current UTC day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedSession {
    pub name: SessionName,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub high: Option<f64>,
    pub low: Option<f64>,
}

impl NamedSession {
    /// Half-open containment: `start <= ts < end`.
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        self.start <= ts && ts < self.end
    }

    fn build(name: SessionName, day: NaiveDate, over: &SessionOverride) -> Self {
        let (dsh, dsm, deh, dem) = name.default_hours();
        let sh = over.start_hour.unwrap_or(dsh);
        let sm = over.start_minute.unwrap_or(dsm);
        let eh = over.end_hour.unwrap_or(deh);
        let em = over.end_minute.unwrap_or(dem);

        let day_start = day.and_time(NaiveTime::MIN).and_utc();
        let start = day_start + Duration::minutes(i64::from(sh) * 60 + i64::from(sm));
        let mut end = day_start + Duration::minutes(i64::from(eh) * 60 + i64::from(em));
        if end <= start {
            end += Duration::milliseconds(DAY_MS); // overnight span (Sydney default)
        }

        Self {
            name,
            start,
            end,
            high: None,
            low: None,
        }
    }

    fn accumulate(&mut self, high: f64, low: f64) {
        if !high.is_nan() {
            self.high = Some(self.high.map_or(high, |cur| cur.max(high)));
        }
        if !low.is_nan() {
            self.low = Some(self.low.map_or(low, |cur| cur.min(low)));
        }
    }
}

/// Tracks all four named sessions across UTC day changes.
#[derive(Debug, Clone, Default)]
pub struct NamedSessionTracker {
    day: Option<NaiveDate>,
    sessions: Vec<NamedSession>,
}

impl NamedSessionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update for one bar: rebuild on UTC day change, then fold the bar's
    /// high/low into every session containing its timestamp. NaN values
    /// contribute nothing.
    pub fn on_bar(
        &mut self,
        ts: DateTime<Utc>,
        high: f64,
        low: f64,
        config: &ClassifierConfig,
    ) {
        let day = ts.date_naive();
        if self.day != Some(day) {
            self.rebuild(day, config);
        }
        for session in &mut self.sessions {
            if session.contains(ts) {
                session.accumulate(high, low);
            }
        }
    }

    /// Current sessions, empty before the first bar.
    pub fn sessions(&self) -> &[NamedSession] {
        &self.sessions
    }

    fn rebuild(&mut self, day: NaiveDate, config: &ClassifierConfig) {
        self.day = Some(day);
        self.sessions = SessionName::ALL
            .iter()
            .map(|&name| {
                let over = match name {
                    SessionName::Sydney => &config.sydney,
                    SessionName::Asia => &config.asia,
                    SessionName::London => &config.london,
                    SessionName::NewYork => &config.new_york,
                };
                NamedSession::build(name, day, over)
            })
            .collect();
    }
}
