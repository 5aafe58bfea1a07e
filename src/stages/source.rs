//! Stamps every record with the publisher identifier of the batch.

use super::Stage;
use crate::models::{Record, RecordSet};

/// Sets `source_id` on every record, overwriting any previous value.
#[derive(Debug, Clone)]
pub struct SourceTagger {
    source_id: String,
}

impl SourceTagger {
    pub fn new(source_id: impl Into<String>) -> Self {
        SourceTagger {
            source_id: source_id.into(),
        }
    }
}

impl Stage for SourceTagger {
    fn name(&self) -> &'static str {
        "source_id"
    }

    fn apply(&self, records: RecordSet) -> RecordSet {
        records.map_records(|record| Record {
            source_id: Some(self.source_id.clone()),
            ..record
        })
    }
}
