//! Session windows — the outer per-day activity window and the four named
//! trading sessions.

pub mod named;
pub mod window;

pub use named::{NamedSession, NamedSessionTracker, SessionName};
pub use window::SessionWindow;
