//! Bar data boundary.

pub mod ingest;

pub use ingest::{read_bars, read_bars_path, IngestError};
