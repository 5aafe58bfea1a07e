//! The cleaning pipeline: an ordered list of stages applied to one batch.
//!
//! [`Pipeline::standard`] builds the canonical sequence:
//!
//! ```text
//! source_id → host → title → uid → body → title_tokens → body_tokens → dedup → completeness
//! ```
//!
//! The pipeline is a pure function of the input [`RecordSet`] and the values
//! it was built with. The stopword set and uid hasher are passed in, not read
//! from globals, so running it twice on the same input gives identical output.

use crate::config::CleanerConfig;
use crate::error::Result;
use crate::models::{Field, RecordSet};
use crate::stages::{
    BodyNormalizer, CompletenessFilter, Deduplicator, HostExtractor, Md5Hasher, SourceTagger,
    Stage, TextField, TitleReconciler, TokenCounter, UidGenerator, UidHasher,
};
use crate::stopwords::StopWords;
use std::sync::Arc;
use tracing::{info, instrument};

/// Row counts observed while running a pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineSummary {
    pub rows_read: usize,
    pub rows_kept: usize,
    /// Rows removed by each stage that removed any, in stage order.
    pub dropped: Vec<(&'static str, usize)>,
}

impl PipelineSummary {
    pub fn dropped_by(&self, stage: &str) -> usize {
        self.dropped
            .iter()
            .find(|(name, _)| *name == stage)
            .map_or(0, |(_, n)| *n)
    }
}

/// A fixed sequence of stages.
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Pipeline { stages }
    }

    /// The full normalization and deduplication sequence.
    pub fn standard(
        source_id: impl Into<String>,
        stop_words: Arc<StopWords>,
        hasher: Box<dyn UidHasher>,
        required: Vec<Field>,
    ) -> Self {
        Pipeline::new(vec![
            Box::new(SourceTagger::new(source_id)),
            Box::new(HostExtractor),
            Box::new(TitleReconciler),
            Box::new(UidGenerator::new(hasher)),
            Box::new(BodyNormalizer),
            Box::new(TokenCounter::new(TextField::Title, Arc::clone(&stop_words))),
            Box::new(TokenCounter::new(TextField::Body, stop_words)),
            Box::new(Deduplicator),
            Box::new(CompletenessFilter::new(required)),
        ])
    }

    /// The standard sequence configured from `config`, hashing uids with MD5.
    pub fn from_config(source_id: impl Into<String>, config: &CleanerConfig) -> Result<Self> {
        let stop_words = Arc::new(config.stop_words()?);
        Ok(Pipeline::standard(
            source_id,
            stop_words,
            Box::new(Md5Hasher),
            config.required_fields.clone(),
        ))
    }

    /// Stage names in execution order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Run every stage in order over `records`.
    #[instrument(level = "info", skip_all, fields(rows = records.len()))]
    pub fn run(&self, records: RecordSet) -> (RecordSet, PipelineSummary) {
        let mut summary = PipelineSummary {
            rows_read: records.len(),
            ..Default::default()
        };

        let mut records = records;
        for stage in &self.stages {
            let before = records.len();
            info!(stage = stage.name(), rows = before, "Running stage");
            records = stage.apply(records);

            // A custom stage may add rows; only removals are counted.
            let dropped = before.saturating_sub(records.len());
            if dropped > 0 {
                info!(
                    stage = stage.name(),
                    dropped,
                    rows = records.len(),
                    "Stage removed rows"
                );
                summary.dropped.push((stage.name(), dropped));
            }
        }

        summary.rows_kept = records.len();
        (records, summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;

    fn standard() -> Pipeline {
        Pipeline::standard(
            "elpais",
            Arc::new(StopWords::spanish()),
            Box::new(Md5Hasher),
            CleanerConfig::default().required_fields,
        )
    }

    fn raw(row: usize, url: &str, title: &str, body: &str) -> Record {
        let text = |s: &str| Some(s.to_string());
        Record::new(row, url, text(title), text(body))
    }

    #[test]
    fn test_stage_order() {
        assert_eq!(
            standard().stage_names(),
            vec![
                "source_id",
                "host",
                "title",
                "uid",
                "body",
                "title_tokens",
                "body_tokens",
                "dedup",
                "completeness"
            ]
        );
    }

    #[test]
    fn test_same_url_different_titles_share_uid() {
        let input = RecordSet::new(vec![
            raw(0, "https://a.com/x", "", "line1\nline2"),
            raw(1, "https://a.com/x", "Dup", "other"),
        ]);
        let (out, summary) = standard().run(input);

        assert_eq!(out.len(), 2);
        assert_eq!(summary.rows_kept, 2);
        let first = &out.records()[0];
        let second = &out.records()[1];
        assert_eq!(first.uid, second.uid);
        assert_eq!(first.title.as_deref(), Some("x"));
        assert_eq!(first.body.as_deref(), Some("line1 line2"));
        assert_eq!(second.title.as_deref(), Some("Dup"));
        assert_eq!(first.host.as_deref(), Some("a.com"));
        assert_eq!(first.source_id.as_deref(), Some("elpais"));
    }

    #[test]
    fn test_summary_counts_drops_per_stage() {
        let input = RecordSet::new(vec![
            raw(0, "https://a.com/uno", "Sube el paro", "Texto"),
            raw(1, "https://a.com/dos", "Sube el paro", "Otro texto"),
            raw(2, "https://a.com/tres", "Sin cuerpo", ""),
            raw(3, "no es una url", "Titular", "Texto"),
            raw(4, "https://a.com/cinco", "Cae la bolsa", "La bolsa cae"),
        ]);
        let (out, summary) = standard().run(input);

        let rows: Vec<usize> = out.iter().map(|r| r.row).collect();
        assert_eq!(rows, vec![0, 4]);
        assert_eq!(summary.rows_read, 5);
        assert_eq!(summary.dropped_by("dedup"), 1);
        assert_eq!(summary.dropped_by("completeness"), 2);
        assert_eq!(summary.dropped_by("host"), 0);
    }

    #[test]
    fn test_run_is_deterministic() {
        let input = RecordSet::new(vec![
            raw(
                0,
                "https://a.com/uno",
                "El Gobierno anuncia medidas",
                "Primera línea\nsegunda",
            ),
            raw(1, "https://a.com/sube-el-paro", "", "El paro sube"),
        ]);
        let (first, _) = standard().run(input.clone());
        let (second, _) = standard().run(input);
        assert_eq!(first, second);
    }

    #[test]
    fn test_from_config_uses_configured_stopwords() {
        let config = CleanerConfig::from_yaml(
            "stopwords:\n  builtin: false\n  extra: [gobierno]\n",
            std::path::Path::new("config.yaml"),
        )
        .unwrap();
        let pipeline = Pipeline::from_config("elpais", &config).unwrap();
        let input = RecordSet::new(vec![raw(0, "https://a.com/x", "El Gobierno", "texto")]);
        let (out, _) = pipeline.run(input);
        // "el" is no longer a stopword, "gobierno" is.
        assert_eq!(out.records()[0].title_token_count, Some(1));
    }

    /// Appends a copy of the last record.
    struct Repeater;

    impl Stage for Repeater {
        fn name(&self) -> &'static str {
            "repeat"
        }

        fn apply(&self, records: RecordSet) -> RecordSet {
            let extra = records.records().last().cloned();
            records.into_iter().chain(extra).collect()
        }
    }

    #[test]
    fn test_stage_that_adds_rows_is_not_counted_as_a_drop() {
        let pipeline = Pipeline::new(vec![Box::new(Repeater), Box::new(Deduplicator)]);
        let input = RecordSet::new(vec![raw(0, "https://a.com/x", "Titular", "Texto")]);
        let (out, summary) = pipeline.run(input);

        assert_eq!(out.len(), 1);
        assert_eq!(summary.rows_read, 1);
        assert_eq!(summary.rows_kept, 1);
        assert_eq!(summary.dropped_by("repeat"), 0);
        assert_eq!(summary.dropped, vec![("dedup", 1)]);
    }
}
