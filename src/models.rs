//! Data models for article rows flowing through the cleaning pipeline.
//!
//! - [`Record`]: one article row, created by the loader and rebuilt by every stage
//! - [`RecordSet`]: the ordered collection of records passed between stages
//! - [`Field`]: the named columns a record carries
//! - [`OutputRow`]: the serialized shape of a record in the clean table
//!
//! A `RecordSet` is a sequence, not a set. Row order is part of the contract:
//! the deduplicator keeps the first record of each title group, so whatever
//! order the fetcher produced decides which duplicate survives.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named column of the article table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Url,
    Title,
    Body,
    Host,
    SourceId,
    Uid,
}

impl Field {
    /// Column name as it appears in the input and output tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Url => "url",
            Field::Title => "title",
            Field::Body => "body",
            Field::Host => "host",
            Field::SourceId => "source_id",
            Field::Uid => "uid",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One article row.
///
/// Everything except `url` may be absent. Derived columns start out as `None`
/// and are filled in by the stage that owns them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// Zero-based position of the row in the input file.
    pub row: usize,
    /// The article URL; the natural key until a uid is assigned.
    pub url: String,
    /// The article headline.
    pub title: Option<String>,
    /// The article text.
    pub body: Option<String>,
    /// Publisher identifier shared by the whole batch.
    pub source_id: Option<String>,
    /// Network authority (`host[:port]`) of `url`.
    pub host: Option<String>,
    /// Hex digest of `url`; the primary key once assigned.
    pub uid: Option<String>,
    /// Meaningful token count of `title`.
    pub title_token_count: Option<usize>,
    /// Meaningful token count of `body`.
    pub body_token_count: Option<usize>,
}

impl Record {
    /// Build a raw record as read from the input table.
    ///
    /// Blank titles and bodies are stored as absent.
    pub fn new(
        row: usize,
        url: impl Into<String>,
        title: Option<String>,
        body: Option<String>,
    ) -> Self {
        Record {
            row,
            url: url.into(),
            title: title.filter(|t| !is_blank(t)),
            body: body.filter(|b| !is_blank(b)),
            ..Default::default()
        }
    }

    /// The value held in `field`, or `None` when it is absent or blank.
    pub fn field(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Url => Some(self.url.as_str()),
            Field::Title => self.title.as_deref(),
            Field::Body => self.body.as_deref(),
            Field::Host => self.host.as_deref(),
            Field::SourceId => self.source_id.as_deref(),
            Field::Uid => self.uid.as_deref(),
        };
        value.filter(|v| !is_blank(v))
    }

    pub fn is_missing(&self, field: Field) -> bool {
        self.field(field).is_none()
    }
}

/// `true` for empty or whitespace-only values.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// An ordered collection of [`Record`]s sharing one schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new(records: Vec<Record>) -> Self {
        RecordSet { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Rebuild every record with `f`, preserving order and row count.
    pub fn map_records<F>(self, f: F) -> RecordSet
    where
        F: FnMut(Record) -> Record,
    {
        self.records.into_iter().map(f).collect()
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        RecordSet::new(iter.into_iter().collect())
    }
}

impl IntoIterator for RecordSet {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// A raw row of the dirty input table.
///
/// Unknown columns (`newspaper_uid`, `host`, `n_tokens_title`, ...) are ignored;
/// this pipeline recomputes them.
#[derive(Debug, Deserialize)]
pub struct RawRow {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

/// A record as written to the clean table, `uid` first.
#[derive(Debug, Serialize)]
pub struct OutputRow<'a> {
    pub uid: &'a str,
    pub url: &'a str,
    pub title: &'a str,
    pub body: &'a str,
    pub host: &'a str,
    pub source_id: &'a str,
    pub title_token_count: Option<usize>,
    pub body_token_count: Option<usize>,
}

impl<'a> From<&'a Record> for OutputRow<'a> {
    fn from(record: &'a Record) -> Self {
        OutputRow {
            uid: record.uid.as_deref().unwrap_or_default(),
            url: &record.url,
            title: record.title.as_deref().unwrap_or_default(),
            body: record.body.as_deref().unwrap_or_default(),
            host: record.host.as_deref().unwrap_or_default(),
            source_id: record.source_id.as_deref().unwrap_or_default(),
            title_token_count: record.title_token_count,
            body_token_count: record.body_token_count,
        }
    }
}
