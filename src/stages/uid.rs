//! Content-derived record identifiers.
//!
//! The uid is the hex digest of the URL bytes. Identical URLs always produce
//! identical uids, which is what lets the downstream store upsert by uid when
//! the same batch is loaded twice.

use super::Stage;
use crate::models::{Record, RecordSet};
use md5::{Digest, Md5};

/// A deterministic hash from bytes to a printable identifier.
pub trait UidHasher: Send + Sync {
    fn uid(&self, bytes: &[u8]) -> String;
}

/// 128-bit MD5 digest, lowercase hex.
///
/// Used for determinism and a negligible collision rate at batch sizes, not
/// for any security property.
#[derive(Debug, Clone, Copy, Default)]
pub struct Md5Hasher;

impl UidHasher for Md5Hasher {
    fn uid(&self, bytes: &[u8]) -> String {
        hex::encode(Md5::digest(bytes))
    }
}

/// Assigns `uid = hash(url)` to every record.
pub struct UidGenerator {
    hasher: Box<dyn UidHasher>,
}

impl UidGenerator {
    pub fn new(hasher: Box<dyn UidHasher>) -> Self {
        UidGenerator { hasher }
    }
}

impl Default for UidGenerator {
    fn default() -> Self {
        UidGenerator::new(Box::new(Md5Hasher))
    }
}

impl Stage for UidGenerator {
    fn name(&self) -> &'static str {
        "uid"
    }

    fn apply(&self, records: RecordSet) -> RecordSet {
        records.map_records(|record| Record {
            uid: Some(self.hasher.uid(record.url.as_bytes())),
            ..record
        })
    }
}
