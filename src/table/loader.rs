//! Table loader for scraped article CSV files.
//!
//! The header row must name at least `url`, `title` and `body`. Any other
//! column (`newspaper_uid`, `host`, `n_tokens_title`, ...) is ignored, because
//! the pipeline recomputes it. Values are loaded as-is except that blank
//! titles and bodies become absent.

use crate::error::{CleanerError, Result};
use crate::models::{RawRow, Record, RecordSet};
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, instrument};

/// Columns every input table must have.
pub const REQUIRED_COLUMNS: [&str; 3] = ["url", "title", "body"];

/// Read and parse the CSV at `path`, preserving row order.
///
/// # Errors
///
/// - [`CleanerError::Io`] if the file cannot be read
/// - [`CleanerError::Format`] if it is not a CSV table with the required columns
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn load_records(path: &Path) -> Result<RecordSet> {
    let bytes = fs::read(path)
        .await
        .map_err(|source| CleanerError::io(path, source))?;
    debug!(bytes = bytes.len(), "Read input file");

    let records = parse_records(&bytes, path)?;
    info!(rows = records.len(), "Loaded article table");
    Ok(records)
}

/// Parse CSV bytes into records. `origin` is only used in error messages.
pub fn parse_records(bytes: &[u8], origin: &Path) -> Result<RecordSet> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| CleanerError::format(origin, e))?
        .clone();
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|h| h == **column))
    {
        let reason = format!("missing column `{missing}`");
        return Err(CleanerError::format(origin, reason));
    }

    reader
        .deserialize::<RawRow>()
        .enumerate()
        .map(|(row, result)| {
            let raw = result.map_err(|e| CleanerError::format(origin, e))?;
            Ok(Record::new(row, raw.url, raw.title, raw.body))
        })
        .collect::<Result<Vec<_>>>()
        .map(RecordSet::new)
}
