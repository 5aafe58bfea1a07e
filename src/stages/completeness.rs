//! Drops records that are missing a required field.

use super::Stage;
use crate::models::{Field, RecordSet};
use tracing::debug;

/// Keeps only records holding a non-blank value in every required field.
#[derive(Debug, Clone)]
pub struct CompletenessFilter {
    required: Vec<Field>,
}

impl CompletenessFilter {
    pub fn new(required: Vec<Field>) -> Self {
        CompletenessFilter { required }
    }
}

impl Default for CompletenessFilter {
    fn default() -> Self {
        CompletenessFilter::new(vec![
            Field::Url,
            Field::Title,
            Field::Body,
            Field::Host,
            Field::Uid,
        ])
    }
}

impl Stage for CompletenessFilter {
    fn name(&self) -> &'static str {
        "completeness"
    }

    fn apply(&self, records: RecordSet) -> RecordSet {
        records
            .into_iter()
            .filter(|record| {
                let missing = self.required.iter().find(|f| record.is_missing(**f));
                if let Some(field) = missing {
                    debug!(row = record.row, %field, "Dropping incomplete record");
                }
                missing.is_none()
            })
            .collect()
    }
}
