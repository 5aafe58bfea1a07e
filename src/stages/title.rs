//! Fills in missing titles from the URL slug.

use super::Stage;
use crate::models::{Field, Record, RecordSet};
use crate::utils::truncate_for_log;
use tracing::debug;
use url::Url;

/// Synthesizes a title for records without one.
///
/// The last path segment of the URL is split on `-` and rejoined with spaces,
/// so `https://example.com/news/breaking-market-update` becomes
/// `breaking market update`. Records that already have a title are untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleReconciler;

/// The last path segment of `url`, or the text after its final `/` when the
/// URL does not parse. Empty for URLs that end in `/` or have no path.
pub fn last_path_segment(url: &str) -> &str {
    let url = url.trim();
    let parsed = if url.starts_with("//") {
        Url::parse(&format!("https:{url}"))
    } else {
        Url::parse(url)
    };
    if let Ok(parsed) = parsed {
        if parsed.cannot_be_a_base() || matches!(parsed.path(), "" | "/") {
            return "";
        }
    }
    // Slice the raw text rather than the parsed path, which is percent-encoded.
    let without_fragment = url.split('#').next().unwrap_or_default();
    let without_query = without_fragment.split('?').next().unwrap_or_default();
    without_query.rsplit('/').next().unwrap_or_default()
}

/// Build a human-readable title from the URL slug.
///
/// # Arguments
///
/// * `url` - The article URL
///
/// # Returns
///
/// The last path segment with every `-` replaced by a space. The result is
/// empty when the URL has no path segment (`https://elpais.com/`).
///
/// # Examples
///
/// ```ignore
/// let title = title_from_url("https://elpais.com/economia/sube-el-paro?utm=rss");
/// assert_eq!(title, "sube el paro");
/// ```
pub fn title_from_url(url: &str) -> String {
    last_path_segment(url).replace('-', " ")
}

impl Stage for TitleReconciler {
    fn name(&self) -> &'static str {
        "title"
    }

    fn apply(&self, records: RecordSet) -> RecordSet {
        records.map_records(|record| {
            if !record.is_missing(Field::Title) {
                return record;
            }
            let title = title_from_url(&record.url);
            debug!(
                row = record.row,
                title = %truncate_for_log(&title, 80),
                "Synthesized missing title"
            );
            Record {
                title: Some(title),
                ..record
            }
        })
    }
}
