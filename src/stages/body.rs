//! Flattens multi-line article bodies onto a single line.

use super::Stage;
use crate::models::{Record, RecordSet};

/// Replaces each `\n` in `body` with one space. Nothing else changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyNormalizer;

pub fn normalize_body(body: &str) -> String {
    body.replace('\n', " ")
}

impl Stage for BodyNormalizer {
    fn name(&self) -> &'static str {
        "body"
    }

    fn apply(&self, records: RecordSet) -> RecordSet {
        records.map_records(|record| {
            let body = record.body.as_deref().map(normalize_body);
            Record { body, ..record }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newlines_become_spaces() {
        assert_eq!(
            normalize_body("Paragraph one.\nParagraph two."),
            "Paragraph one. Paragraph two."
        );
    }

    #[test]
    fn test_length_is_preserved() {
        let body = "a\n\nb\r\nc";
        let normalized = normalize_body(body);
        assert_eq!(normalized, "a  b\r c");
        assert_eq!(normalized.len(), body.len());
    }

    #[test]
    fn test_absent_body_stays_absent() {
        let records = RecordSet::new(vec![
            Record::new(0, "https://a.com/x", None, None),
            Record::new(1, "https://a.com/y", None, Some("a\nb".to_string())),
        ]);
        let out = BodyNormalizer.apply(records);
        assert_eq!(out.records()[0].body, None);
        assert_eq!(out.records()[1].body.as_deref(), Some("a b"));
    }
}
