//! CSV bar ingestion.
//!
//! The host platform normally feeds bars directly; this reader exists so the
//! classifier can be run against exported bar data. Expected columns:
//! `timestamp,open,high,low,close,volume`, where `timestamp` is either an
//! RFC 3339 string or epoch milliseconds.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

use crate::domain::Bar;

#[derive(Debug, Deserialize)]
struct CsvBar {
    timestamp: String,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    #[serde(default)]
    volume: u64,
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read bar file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV record: {0}")]
    Csv(#[from] csv::Error),

    #[error("record {record}: unparseable timestamp {value:?}")]
    Timestamp { record: usize, value: String },
}

/// Read bars from a CSV file path.
pub fn read_bars_path(path: &Path) -> Result<Vec<Bar>, IngestError> {
    let file = std::fs::File::open(path)?;
    read_bars(file)
}

/// Read bars from any reader producing CSV with a header row.
pub fn read_bars<R: Read>(reader: R) -> Result<Vec<Bar>, IngestError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut bars = Vec::new();
    for (index, record) in csv_reader.deserialize::<CsvBar>().enumerate() {
        let record = record?;
        let timestamp =
            parse_timestamp(&record.timestamp).ok_or_else(|| IngestError::Timestamp {
                record: index + 1,
                value: record.timestamp.clone(),
            })?;
        bars.push(Bar {
            timestamp,
            open: record.open,
            high: record.high,
            low: record.low,
            close: record.close,
            volume: record.volume,
        });
    }
    Ok(bars)
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(millis) = raw.parse::<i64>() {
        return DateTime::from_timestamp_millis(millis);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
