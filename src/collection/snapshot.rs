//! Snapshot - immutable, versioned view of one collection.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::record::SurveyRecord;

/// The full value of a collection at one point in time.
///
/// Cloning is cheap (shared `Arc`). A snapshot never changes after it has been
/// handed out; mutations on the owning collection produce a new one.
pub struct Snapshot<R> {
    records: Arc<Vec<R>>,
    version: u64,
}

impl<R> Snapshot<R> {
    pub(crate) fn new(records: Arc<Vec<R>>, version: u64) -> Self {
        Self { records, version }
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Version of the owning collection when this snapshot was taken.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// True if both snapshots share the same underlying collection value,
    /// i.e. the record sequence was not replaced in between.
    pub fn ptr_eq(&self, other: &Snapshot<R>) -> bool {
        Arc::ptr_eq(&self.records, &other.records)
    }

    pub fn to_vec(&self) -> Vec<R>
    where
        R: Clone,
    {
        self.records.as_ref().clone()
    }
}

impl<R: SurveyRecord> Snapshot<R> {
    /// Find a record by id.
    pub fn get(&self, id: u32) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn ids(&self) -> Vec<u32> {
        self.records.iter().map(|record| record.id()).collect()
    }
}

impl<R> Clone for Snapshot<R> {
    fn clone(&self) -> Self {
        Snapshot {
            records: Arc::clone(&self.records),
            version: self.version,
        }
    }
}

impl<R> Deref for Snapshot<R> {
    type Target = [R];

    fn deref(&self) -> &[R] {
        &self.records
    }
}

impl<R: PartialEq> PartialEq for Snapshot<R> {
    /// Compares record values only; versions are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records
    }
}

impl<R: fmt::Debug> fmt::Debug for Snapshot<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snapshot")
            .field("version", &self.version)
            .field("records", &self.records)
            .finish()
    }
}

impl<R> Default for Snapshot<R> {
    fn default() -> Self {
        Snapshot {
            records: Arc::new(Vec::new()),
            version: 0,
        }
    }
}
