//! RecordRepository - typed writer handle for one collection slot.

use std::marker::PhantomData;

use crate::collection::Snapshot;
use crate::identity::{IdentityField, IdentityInput};
use crate::record::SurveyRecord;

use super::{Operation, Slot, SurveyStore};

type RecordOf<S> = <S as Slot>::Record;

/// Mutating access to the collection selected by slot `S`.
///
/// Obtained from [`SurveyStore::records`]. Every method returns the snapshot
/// after the operation; operations on absent ids return the unchanged
/// snapshot and publish nothing.
pub struct RecordRepository<'a, S: Slot> {
    store: &'a mut SurveyStore,
    _marker: PhantomData<S>,
}

impl<'a, S: Slot> RecordRepository<'a, S> {
    pub(crate) fn new(store: &'a mut SurveyStore) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    /// Current snapshot without mutating.
    pub fn snapshot(&self) -> Snapshot<RecordOf<S>> {
        S::collection(&self.store.collections).snapshot()
    }

    /// Append a record with a fresh id and the collection's current identity.
    pub fn add(&mut self, draft: <RecordOf<S> as SurveyRecord>::Draft) -> Snapshot<RecordOf<S>> {
        let snapshot = S::collection_mut(&mut self.store.collections).add(draft);
        let id = snapshot.last().map(|record| record.id());
        self.store.record_change(S::KIND, Operation::Add, id, snapshot.version());
        snapshot
    }

    /// Assign one line-item field on the record with `id`.
    pub fn update_by_id(
        &mut self,
        id: u32,
        field: <RecordOf<S> as SurveyRecord>::Field,
    ) -> Snapshot<RecordOf<S>> {
        let field_name = <RecordOf<S> as SurveyRecord>::field_name(&field);
        let collection = S::collection_mut(&mut self.store.collections);
        let before = collection.version();
        let snapshot = collection.update_by_id(id, field);

        if snapshot.version() == before {
            tracing::debug!(
                collection = %S::KIND,
                id,
                field = field_name,
                "update_by_id: no such record"
            );
        } else {
            tracing::trace!(collection = %S::KIND, id, field = field_name, "field updated");
            self.store
                .record_change(S::KIND, Operation::UpdateById, Some(id), snapshot.version());
        }
        snapshot
    }

    /// Remove the record with `id`.
    pub fn remove_by_id(&mut self, id: u32) -> Snapshot<RecordOf<S>> {
        let collection = S::collection_mut(&mut self.store.collections);
        let before = collection.version();
        let snapshot = collection.remove_by_id(id);

        if snapshot.version() == before {
            tracing::debug!(collection = %S::KIND, id, "remove_by_id: no such record");
        } else {
            self.store
                .record_change(S::KIND, Operation::RemoveById, Some(id), snapshot.version());
        }
        snapshot
    }

    /// Set an identity field (storage format) on every record and remember
    /// it for later adds.
    pub fn replace_all(
        &mut self,
        field: IdentityField,
        value: impl Into<String>,
    ) -> Snapshot<RecordOf<S>> {
        let snapshot = S::collection_mut(&mut self.store.collections).replace_all(field, value);
        tracing::trace!(
            collection = %S::KIND,
            field = %field,
            records = snapshot.len(),
            "identity propagated"
        );
        self.store
            .record_change(S::KIND, Operation::ReplaceAll, None, snapshot.version());
        snapshot
    }

    /// Blank the identity used for later adds; existing records are left as
    /// they are.
    pub fn reset_identity(&mut self) -> Snapshot<RecordOf<S>> {
        let snapshot = S::collection_mut(&mut self.store.collections).reset_identity();
        self.store
            .record_change(S::KIND, Operation::ResetIdentity, None, snapshot.version());
        snapshot
    }

    /// Apply an identity edit coming from the editing surface: convert date
    /// and time to the storage format, then propagate.
    pub fn edit_identity(&mut self, input: IdentityInput) -> Snapshot<RecordOf<S>> {
        let (field, value) = input.into_storage();
        self.replace_all(field, value)
    }
}
