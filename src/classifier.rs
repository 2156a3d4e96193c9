//! The per-bar state machine tying everything together.
//!
//! One `QuarterClassifier` instance is bound to one bar stream. Each call to
//! [`QuarterClassifier::on_bar`] mutates the instance in place; callers feed
//! bars strictly in increasing timestamp order and never concurrently.
//!
//! Per bar: the timeframe detector observes the timestamp, the named-session
//! tracker rebuilds/accumulates, the outer window for the bar's civil day is
//! computed, and — only inside the window — the marker state machine decides
//! emission. Leaving the window clears marker de-duplication so re-entry
//! starts cleanly.

use crate::config::ClassifierConfig;
use crate::domain::BarRead;
use crate::markers::MarkerState;
use crate::output::{BarOutput, Marker, SessionLevels};
use crate::session::{NamedSessionTracker, SessionWindow};
use crate::timeframe::TimeframeDetector;

#[derive(Debug, Clone)]
pub struct QuarterClassifier {
    config: ClassifierConfig,
    detector: TimeframeDetector,
    tracker: NamedSessionTracker,
    markers: MarkerState,
}

impl QuarterClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            config,
            detector: TimeframeDetector::new(),
            tracker: NamedSessionTracker::new(),
            markers: MarkerState::new(),
        }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Process one bar and produce its output record.
    pub fn on_bar<B: BarRead>(&mut self, bar: &B) -> BarOutput {
        let ts = bar.timestamp();
        self.detector.observe(ts);

        // Named sessions update on every bar, in or out of the outer window.
        self.tracker.on_bar(ts, bar.high(), bar.low(), &self.config);
        let sessions: Vec<SessionLevels> =
            self.tracker.sessions().iter().map(SessionLevels::from).collect();

        let window = SessionWindow::for_bar(ts, &self.config);
        if !window.contains(ts) {
            self.markers.reset();
            return BarOutput {
                marker: None,
                sessions,
            };
        }

        let fire = self.markers.on_bar(
            self.detector.mode(),
            ts.timestamp_millis(),
            window.start_ms(),
            self.config.session_tz,
        );
        let marker = fire.map(|f| {
            let close = bar.close();
            Marker {
                base: if close.is_nan() { 0.0 } else { close },
                first_segment: f.first_segment,
            }
        });

        BarOutput { marker, sessions }
    }

    /// Convenience: run a whole slice of bars through the classifier.
    pub fn run<B: BarRead>(&mut self, bars: &[B]) -> Vec<BarOutput> {
        bars.iter().map(|bar| self.on_bar(bar)).collect()
    }
}
