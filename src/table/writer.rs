//! Table writer for cleaned article records.
//!
//! Rows are written in record order with `uid` as the leading (index) column:
//!
//! ```text
//! uid,url,title,body,host,source_id,title_token_count,body_token_count
//! ```
//!
//! CSV is the default. JSON writes an array of objects with the same keys, for
//! consumers that would rather not parse CSV.

use crate::error::{CleanerError, Result};
use crate::models::{OutputRow, RecordSet};
use clap::ValueEnum;
use std::io;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

/// Output columns, in order.
pub const OUTPUT_COLUMNS: [&str; 8] = [
    "uid",
    "url",
    "title",
    "body",
    "host",
    "source_id",
    "title_token_count",
    "body_token_count",
];

/// Encoding of the clean table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

fn encode_csv(records: &RecordSet) -> csv::Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    // Header is written by hand so an empty table still has one.
    writer.write_record(OUTPUT_COLUMNS)?;
    for record in records {
        writer.serialize(OutputRow::from(record))?;
    }
    writer.into_inner().map_err(|e| e.into_error().into())
}

fn encode_json(records: &RecordSet) -> serde_json::Result<Vec<u8>> {
    let rows: Vec<OutputRow<'_>> = records.iter().map(OutputRow::from).collect();
    serde_json::to_vec_pretty(&rows)
}

/// Serialize `records` in `format`.
pub fn encode_records(records: &RecordSet, format: OutputFormat) -> io::Result<Vec<u8>> {
    match format {
        OutputFormat::Csv => encode_csv(records).map_err(io::Error::other),
        OutputFormat::Json => encode_json(records).map_err(io::Error::other),
    }
}

/// Write `records` to `path`, creating its parent directory if needed.
///
/// # Errors
///
/// Returns [`CleanerError::Io`] if the destination cannot be written.
#[instrument(level = "info", skip_all, fields(path = %path.display(), format = ?format))]
pub async fn write_records(
    records: &RecordSet,
    path: &Path,
    format: OutputFormat,
) -> Result<()> {
    let bytes = encode_records(records, format).map_err(|e| CleanerError::io(path, e))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent).await {
            error!(dir = %parent.display(), error = %e, "Failed to create output dir");
            return Err(CleanerError::io(parent, e));
        }
    }

    fs::write(path, &bytes)
        .await
        .map_err(|e| CleanerError::io(path, e))?;
    info!(
        rows = records.len(),
        bytes = bytes.len(),
        "Wrote clean table"
    );
    Ok(())
}
