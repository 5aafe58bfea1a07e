//! # News Cleaner
//!
//! Turns raw scraped news-article tables into a cleaned, deduplicated,
//! feature-annotated table ready to be loaded into storage.
//!
//! ## Features
//!
//! - Tags every row with the publisher identifier taken from the input filename
//! - Derives the network host of every article URL
//! - Rebuilds missing titles from the URL slug
//! - Assigns a stable uid (MD5 of the URL) used downstream as the primary key
//! - Flattens multi-line bodies and counts meaningful (non-stopword) tokens
//! - Drops repeated titles (first occurrence wins) and incomplete rows
//!
//! ## Architecture
//!
//! 1. **Loading**: Parse the dirty CSV into a [`RecordSet`] ([`table::loader`])
//! 2. **Cleaning**: Run the [`Pipeline`] of [`stages`] over the whole batch
//! 3. **Writing**: Serialize the surviving records ([`table::writer`])
//!
//! Only loading and writing touch the file system. Everything in between is a
//! pure function of the records and the configuration.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod stages;
pub mod stopwords;
pub mod table;
pub mod utils;

pub use config::CleanerConfig;
pub use error::{CleanerError, ParseWarning, Result};
pub use models::{Field, Record, RecordSet};
pub use pipeline::{Pipeline, PipelineSummary};
pub use table::OutputFormat;

use std::path::Path;
use tracing::{debug, info, instrument};

/// Load `input`, clean it and write the result to `output`.
///
/// The pipeline is built from `config` before the input is read, so a bad
/// stopword file fails the run before any article is loaded.
///
/// # Arguments
///
/// * `input` - The dirty CSV table
/// * `output` - Where the clean table is written
/// * `source_id` - Publisher identifier stamped on every record
/// * `config` - Required fields and stopword sources
/// * `format` - Serialization of the clean table
///
/// # Returns
///
/// Row counts for the batch: rows read, rows written and rows removed by
/// each stage.
///
/// # Errors
///
/// Returns an error if:
/// - The configured stopword file cannot be read ([`CleanerError::Config`])
/// - The input cannot be read ([`CleanerError::Io`])
/// - The input is not a CSV table with `url`, `title` and `body` columns
///   ([`CleanerError::Format`])
/// - The output cannot be encoded or written
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input.display(), output = %output.display(), %source_id)
)]
pub async fn clean_file(
    input: &Path,
    output: &Path,
    source_id: &str,
    config: &CleanerConfig,
    format: OutputFormat,
) -> Result<PipelineSummary> {
    let pipeline = Pipeline::from_config(source_id, config)?;
    debug!(stages = ?pipeline.stage_names(), "Pipeline ready");
    let records = table::load_records(input).await?;

    let (cleaned, summary) = pipeline.run(records);
    table::write_records(&cleaned, output, format).await?;

    info!(
        rows_read = summary.rows_read,
        rows_written = summary.rows_kept,
        "Batch cleaned"
    );
    Ok(summary)
}
