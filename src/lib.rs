//! quartermark — streaming quarter-marker classifier for price bar streams.
//!
//! One classifier instance consumes a time-ordered bar stream and, per bar:
//! - detects the nominal bar interval from observed timestamp deltas
//! - builds the active session window for the bar's civil day
//! - tracks daily high/low for the Sydney, Asia, London, and New York
//!   trading sessions on UTC calendar days
//! - emits de-duplicated quarter markers partitioning the session into
//!   90-minute blocks and sub-segments (mode-specific algorithms for
//!   1m/5m/15m/1h bars)
//!
//! The per-bar path never fails: unknown intervals, missing prices, and
//! out-of-session bars degrade to "no marker / no contribution."

pub mod classifier;
pub mod config;
pub mod data;
pub mod domain;
pub mod markers;
pub mod output;
pub mod session;
pub mod timeframe;

pub use classifier::QuarterClassifier;
pub use config::{ClassifierConfig, ConfigError, SessionOverride};
pub use domain::{Bar, BarRead};
pub use output::{BarOutput, Marker, SessionLevels};
pub use session::{NamedSession, SessionName, SessionWindow};
pub use timeframe::{TimeframeDetector, TimeframeMode};
