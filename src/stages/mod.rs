//! Transformation stages of the cleaning pipeline.
//!
//! Each stage consumes a [`RecordSet`] and returns a new one. Stages run in a
//! fixed order and never concurrently:
//!
//! | Order | Stage | Module | Row count |
//! |-------|-------|--------|-----------|
//! | 1 | Source identifier tagger | [`source`] | preserved |
//! | 2 | Host extractor | [`host`] | preserved |
//! | 3 | Title reconciler | [`title`] | preserved |
//! | 4 | Identifier generator | [`uid`] | preserved |
//! | 5 | Body normalizer | [`body`] | preserved |
//! | 6 | Text feature extractor (title, then body) | [`tokens`] | preserved |
//! | 7 | Deduplicator | [`dedup`] | may shrink |
//! | 8 | Completeness filter | [`completeness`] | may shrink |
//!
//! Per-record failures never abort a stage. A field that cannot be derived is
//! left empty and the completeness filter drops the record at the end.

use crate::models::RecordSet;

pub mod body;
pub mod completeness;
pub mod dedup;
pub mod host;
pub mod source;
pub mod title;
pub mod tokens;
pub mod uid;

pub use body::BodyNormalizer;
pub use completeness::CompletenessFilter;
pub use dedup::Deduplicator;
pub use host::HostExtractor;
pub use source::SourceTagger;
pub use title::TitleReconciler;
pub use tokens::{TextField, TokenCounter};
pub use uid::{Md5Hasher, UidGenerator, UidHasher};

/// One step of the pipeline.
pub trait Stage {
    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    /// Transform `records` into the input of the next stage.
    fn apply(&self, records: RecordSet) -> RecordSet;
}
