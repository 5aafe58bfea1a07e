//! Command-line interface definitions for News Cleaner.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! The configuration path can also be supplied through the environment.

use crate::table::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the News Cleaner application.
///
/// # Examples
///
/// ```sh
/// # Clean a scraped batch; writes clean_elpais_2021.csv next to it
/// news_cleaner elpais_2021.csv
///
/// # Custom stopwords and JSON output
/// news_cleaner elpais_2021.csv --config cleaner.yaml --format json -o out/elpais.json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the dirty article table (CSV with url, title and body columns)
    pub input: PathBuf,

    /// Where to write the clean table (default: clean_<input filename> next to the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Optional path to a YAML configuration file
    #[arg(short, long, env = "NEWS_CLEANER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output encoding
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Publisher identifier (default: input filename up to the first underscore)
    #[arg(long)]
    pub source_id: Option<String>,
}
