//! Collection - one category's records plus its current survey identity.
//!
//! The identity is tracked alongside the records so that an identity edit on an
//! empty collection still reaches records added afterwards.

mod snapshot;

use std::sync::Arc;

use crate::identity::{IdentityField, SurveyIdentity};
use crate::record::SurveyRecord;

pub use snapshot::Snapshot;

/// Mutable owner of one category's records.
///
/// Every state change bumps `version`. Operations targeting an absent id are
/// no-ops and leave both the records and the version untouched.
#[derive(Debug)]
pub struct Collection<R> {
    records: Arc<Vec<R>>,
    identity: SurveyIdentity,
    version: u64,
}

impl<R: SurveyRecord> Default for Collection<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: SurveyRecord> Collection<R> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            records: Arc::new(Vec::new()),
            identity: SurveyIdentity::default(),
            version: 0,
        }
    }

    /// Create a collection holding `records` in the given order.
    ///
    /// The current identity starts empty: seeded records keep whatever
    /// identity they were constructed with until an identity field is edited.
    pub fn with_records(records: Vec<R>) -> Self {
        Self {
            records: Arc::new(records),
            identity: SurveyIdentity::default(),
            version: 0,
        }
    }

    pub fn snapshot(&self) -> Snapshot<R> {
        Snapshot::new(Arc::clone(&self.records), self.version)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// The identity applied to the next added record.
    pub fn identity(&self) -> &SurveyIdentity {
        &self.identity
    }

    /// `1 + max(existing ids)`, or `1` when empty.
    ///
    /// When the maximum is `u32::MAX` the lowest unused id is taken instead.
    pub fn next_id(&self) -> u32 {
        match self.records.iter().map(|record| record.id()).max() {
            None => 1,
            Some(max) => max.checked_add(1).unwrap_or_else(|| self.lowest_free_id()),
        }
    }

    /// Append a record built from `draft`, a freshly allocated id and the
    /// current identity.
    pub fn add(&mut self, draft: R::Draft) -> Snapshot<R> {
        let id = self.next_id();
        let record = R::from_draft(id, self.identity.clone(), draft);
        Arc::make_mut(&mut self.records).push(record);
        self.bump()
    }

    /// Apply `field` to the record with `id`. No-op if absent.
    pub fn update_by_id(&mut self, id: u32, field: R::Field) -> Snapshot<R> {
        let Some(index) = self.position(id) else {
            return self.snapshot();
        };
        Arc::make_mut(&mut self.records)[index].apply(field);
        self.bump()
    }

    /// Remove the record with `id`. No-op if absent.
    pub fn remove_by_id(&mut self, id: u32) -> Snapshot<R> {
        let Some(index) = self.position(id) else {
            return self.snapshot();
        };
        Arc::make_mut(&mut self.records).remove(index);
        self.bump()
    }

    /// Set an identity field on every record and remember it for later adds.
    pub fn replace_all(&mut self, field: IdentityField, value: impl Into<String>) -> Snapshot<R> {
        let value = value.into();
        if !self.records.is_empty() {
            for record in Arc::make_mut(&mut self.records).iter_mut() {
                record.identity_mut().set(field, value.clone());
            }
        }
        self.identity.set(field, value);
        self.bump()
    }

    /// Replace the whole record sequence, keeping the current identity.
    pub(crate) fn reset(&mut self, records: Vec<R>) -> Snapshot<R> {
        self.records = Arc::new(records);
        self.bump()
    }

    /// Clear the current identity so later adds start blank. Existing
    /// records keep theirs.
    pub fn reset_identity(&mut self) -> Snapshot<R> {
        self.identity = SurveyIdentity::default();
        self.bump()
    }

    fn lowest_free_id(&self) -> u32 {
        let mut used: Vec<u32> = self.records.iter().map(|record| record.id()).collect();
        used.sort_unstable();
        let mut candidate = 1;
        for id in used {
            if id > candidate {
                break;
            }
            if id == candidate {
                candidate += 1;
            }
        }
        candidate
    }

    fn position(&self, id: u32) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    fn bump(&mut self) -> Snapshot<R> {
        self.version += 1;
        self.snapshot()
    }
}
