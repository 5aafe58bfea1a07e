//! # News Cleaner
//!
//! Cleans a scraped news-article table and writes the result next to it.
//!
//! ## Usage
//!
//! ```sh
//! news_cleaner elpais_2021.csv
//! RUST_LOG=debug news_cleaner eluniversal_.csv --config cleaner.yaml
//! ```
//!
//! Progress goes to the log stream. The only data output is the clean table.

use clap::Parser;
use news_cleaner::cli::Cli;
use news_cleaner::utils::{clean_output_path, ensure_writable_parent, source_id_from_path};
use news_cleaner::{clean_file, CleanerConfig};
use std::error::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("news_cleaner starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let config = match CleanerConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            return Err(e.into());
        }
    };

    let source_id = args
        .source_id
        .clone()
        .unwrap_or_else(|| source_id_from_path(&args.input));
    info!(%source_id, "Newspaper uid detected");

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| clean_output_path(&args.input, &config.output_prefix));

    // Early check: fail before doing any work if the destination is unusable
    if let Err(e) = ensure_writable_parent(&output).await {
        error!(
            path = %output.display(),
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e.into());
    }

    let summary = match clean_file(&args.input, &output, &source_id, &config, args.format).await {
        Ok(summary) => summary,
        Err(e) => {
            error!(input = %args.input.display(), error = %e, "Cleaning failed");
            return Err(e.into());
        }
    };

    let elapsed = start_time.elapsed();
    info!(
        rows_read = summary.rows_read,
        duplicates_dropped = summary.dropped_by("dedup"),
        incomplete_dropped = summary.dropped_by("completeness"),
        rows_written = summary.rows_kept,
        path = %output.display(),
        ?elapsed,
        "Execution complete"
    );

    Ok(())
}
