// src/data/loader.rs
use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

use crate::data::record::Record;

/// Relative location of the dataset. Loaded exactly once at startup;
/// there is no other input.
pub const DATA_PATH: &str = "data/superstore.csv";

/// Outcome of a dataset load: the usable records plus a count of rows
/// rejected for data-quality reasons.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub records: Vec<Record>,
    pub skipped_rows: usize,
}

/// Loads the dataset from disk. A missing or unreadable file is fatal to
/// the session and reported here; the caller must not run aggregation or
/// render any scene after a load failure.
pub fn load_records(path: &Path) -> Result<LoadReport> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("could not open dataset at {}", path.display()))?;
    let report = read_records(file)
        .with_context(|| format!("could not read dataset at {}", path.display()))?;
    info!(
        records = report.records.len(),
        skipped = report.skipped_rows,
        path = %path.display(),
        "dataset loaded"
    );
    Ok(report)
}

/// Parses CSV rows into typed records. Rows whose numeric columns fail to
/// parse, or parse to a non-finite value, are rejected before aggregation
/// and counted; they are never coerced to zero.
pub fn read_records<R: Read>(source: R) -> Result<LoadReport> {
    let mut reader = csv::Reader::from_reader(source);
    let mut report = LoadReport::default();

    for (row, parsed) in reader.deserialize::<Record>().enumerate() {
        // Header is line 1, so data row N sits on line N + 1.
        let line = row + 2;
        match parsed {
            Ok(record) if record.is_well_formed() => report.records.push(record),
            Ok(_) => {
                warn!(line, "skipping row with non-finite numeric field");
                report.skipped_rows += 1;
            }
            Err(err) => {
                warn!(line, %err, "skipping malformed row");
                report.skipped_rows += 1;
            }
        }
    }

    Ok(report)
}
