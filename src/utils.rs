//! Path helpers, log truncation and file system checks.
//!
//! - Deriving the publisher identifier and clean output path from the input path
//! - Truncating long article text for log lines
//! - Validating that the output directory is writable before any work is done

use crate::error::{CleanerError, Result};
use std::fs as stdfs;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, instrument};

/// Derive the publisher identifier from an input file path.
///
/// The identifier is the leading token of the file *name* before the first
/// underscore. When the name has no underscore, the file stem is used.
/// Parent directories are never consulted.
///
/// # Arguments
///
/// * `path` - Path of the dirty input table
///
/// # Returns
///
/// The publisher identifier, or an empty string for a path with no file name.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(source_id_from_path(Path::new("data/elpais_2021.csv")), "elpais");
/// assert_eq!(source_id_from_path(Path::new("eluniversal.csv")), "eluniversal");
/// ```
pub fn source_id_from_path(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match name.split_once('_') {
        Some((leading, _)) => leading.to_string(),
        None => path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default(),
    }
}

/// Path of the clean table: `prefix` + input file name, next to the input.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     clean_output_path(Path::new("raw/elpais_.csv"), "clean_"),
///     PathBuf::from("raw/clean_elpais_.csv")
/// );
/// ```
pub fn clean_output_path(input: &Path, prefix: &str) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{prefix}{name}"))
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes on a character boundary, with an
/// ellipsis and the number of dropped bytes appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Ensure the directory that will hold `output` exists and is writable.
///
/// Creates the directory if needed, then creates and removes a probe file.
///
/// # Arguments
///
/// * `output` - Path of the file that will be written
///
/// # Errors
///
/// Returns [`CleanerError::Io`] if the directory cannot be created or a file
/// cannot be created inside it.
#[instrument(level = "info", skip_all, fields(output = %output.display()))]
pub async fn ensure_writable_parent(output: &Path) -> Result<()> {
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir)
        .await
        .map_err(|e| CleanerError::io(&dir, e))?;

    let probe_path = dir.join("..__probe_write__");
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            debug!(dir = %dir.display(), "Probe file written and removed");
            info!("Output directory is writable");
            Ok(())
        }
        Err(e) => Err(CleanerError::io(dir, e)),
    }
}
