//! Removes records that repeat an earlier title.

use super::Stage;
use crate::models::RecordSet;
use itertools::Itertools;
use tracing::debug;

/// Keeps the first record of every group sharing an identical `title`.
///
/// "First" means first in the incoming record order, which is normally fetch
/// order. Records without a title form one group of their own. Dedup is keyed
/// on the title only: two rows with the same URL (and therefore the same uid)
/// but different titles both survive.
#[derive(Debug, Clone, Copy, Default)]
pub struct Deduplicator;

impl Stage for Deduplicator {
    fn name(&self) -> &'static str {
        "dedup"
    }

    fn apply(&self, records: RecordSet) -> RecordSet {
        let before = records.len();
        let kept: RecordSet = records
            .into_iter()
            .unique_by(|record| record.title.clone())
            .collect();
        debug!(dropped = before - kept.len(), "Dropped duplicated titles");
        kept
    }
}
