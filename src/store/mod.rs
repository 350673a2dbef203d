//! SurveyStore - the single owner of every survey collection.
//!
//! ## Example
//!
//! ```ignore
//! use survey_store::{SurveyStore, Tenant, TenantRecordDraft, IdentityInput, TimeScope};
//!
//! let mut store = SurveyStore::seeded();
//! store.records::<Tenant>().edit_identity(IdentityInput::Surveyor("Ahmad".into()));
//! store.records::<Tenant>().add(TenantRecordDraft::new("Toko Amanah", "Kurma", "Ajwa", "1500"));
//!
//! let metrics = store.view().dashboard(TimeScope::Week);
//! ```

mod notice;
mod repository;
mod slots;
mod view;

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use crate::collection::{Collection, Snapshot};
use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::seed::SeedData;

#[cfg(feature = "emitter")]
use crate::emitter::ChangeNotifier;

pub use notice::{Operation, StoreChanged};
pub use repository::RecordRepository;
pub use slots::{
    CollectionKind, Collections, Expedition, ReadyToEat, Rice, Slot, SpiceMadinah, SpiceMakkah,
    Telecom, Tenant,
};
pub use view::StoreView;

/// Two-state store lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    /// Seed data not yet installed; consumers render placeholders.
    Loading,
    Ready,
}

/// In-memory repository holding all survey collections.
///
/// Mutations require `&mut self` and go through [`SurveyStore::records`];
/// readers take [`Snapshot`]s or a [`StoreView`], which stay valid and
/// unchanged across later mutations.
pub struct SurveyStore {
    pub(crate) collections: Collections,
    state: LoadState,
    #[cfg(feature = "emitter")]
    notifier: ChangeNotifier,
}

impl Default for SurveyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SurveyStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurveyStore")
            .field("state", &self.state)
            .field("collections", &self.collections)
            .finish()
    }
}

impl SurveyStore {
    /// An empty store in the `Loading` state.
    pub fn new() -> Self {
        Self {
            collections: Collections::default(),
            state: LoadState::Loading,
            #[cfg(feature = "emitter")]
            notifier: ChangeNotifier::new(),
        }
    }

    /// A ready store holding the built-in seed.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.load_seed(SeedData::builtin());
        store
    }

    /// Build and seed a store as described by `config`.
    pub fn from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        let seed = config.load_seed()?;
        let mut store = Self::new();
        #[cfg(feature = "emitter")]
        {
            store.notifier.set_enabled(config.emit_changes);
        }
        store.load_seed(seed);
        Ok(store)
    }

    /// Read a TOML configuration file and build the store it describes.
    pub fn from_config_path(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let config = StoreConfig::from_path(path)?;
        Self::from_config(&config)
    }

    /// Install `seed` into every collection in one step and mark the store
    /// ready. Current identities are kept.
    pub fn load_seed(&mut self, seed: SeedData) {
        let records = seed.record_count();
        let SeedData {
            spice_makkah,
            spice_madinah,
            rice,
            ready_to_eat,
            expedition,
            tenant,
            telecom,
        } = seed;

        let c = &mut self.collections;
        let versions = [
            (CollectionKind::SpiceMakkah, c.spice_makkah.reset(spice_makkah).version()),
            (CollectionKind::SpiceMadinah, c.spice_madinah.reset(spice_madinah).version()),
            (CollectionKind::Rice, c.rice.reset(rice).version()),
            (CollectionKind::ReadyToEat, c.ready_to_eat.reset(ready_to_eat).version()),
            (CollectionKind::Expedition, c.expedition.reset(expedition).version()),
            (CollectionKind::Tenant, c.tenant.reset(tenant).version()),
            (CollectionKind::Telecom, c.telecom.reset(telecom).version()),
        ];

        self.state = LoadState::Ready;
        tracing::info!(records, "seed loaded, store ready");

        for (kind, version) in versions {
            self.record_change(kind, Operation::Seed, None, version);
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// Move the loading flag. The store never returns to `Loading` once it
    /// is ready; such requests are ignored.
    pub fn set_loading(&mut self, loading: bool) {
        match (self.state, loading) {
            (LoadState::Loading, false) => {
                self.state = LoadState::Ready;
                tracing::info!("store marked ready");
            }
            (LoadState::Ready, true) => {
                tracing::warn!("ignoring request to return a ready store to loading");
            }
            _ => {}
        }
    }

    /// Read access to one collection.
    pub fn collection<S: Slot>(&self) -> &Collection<S::Record> {
        S::collection(&self.collections)
    }

    pub fn snapshot<S: Slot>(&self) -> Snapshot<S::Record> {
        S::collection(&self.collections).snapshot()
    }

    /// Mutating handle for one collection.
    pub fn records<S: Slot>(&mut self) -> RecordRepository<'_, S> {
        RecordRepository::new(self)
    }

    /// Snapshots of every collection, the input of the aggregation engine.
    pub fn view(&self) -> StoreView {
        StoreView::from_collections(&self.collections)
    }

    /// Like [`SurveyStore::view`], but `None` while the store is loading.
    pub fn ready_view(&self) -> Option<StoreView> {
        match self.state {
            LoadState::Loading => None,
            LoadState::Ready => Some(self.view()),
        }
    }

    /// Current version of every collection, for poll-based change detection.
    pub fn versions(&self) -> BTreeMap<CollectionKind, u64> {
        CollectionKind::ALL
            .into_iter()
            .map(|kind| (kind, self.collections.version(kind)))
            .collect()
    }

    /// Listen to changes on every collection.
    #[cfg(feature = "emitter")]
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: Fn(StoreChanged) + Send + Sync + 'static,
    {
        self.notifier.on_change(listener);
    }

    /// Listen to changes on one collection.
    #[cfg(feature = "emitter")]
    pub fn on_collection_change<F>(&mut self, kind: CollectionKind, listener: F)
    where
        F: Fn(StoreChanged) + Send + Sync + 'static,
    {
        self.notifier.on_collection_change(kind, listener);
    }

    pub(crate) fn record_change(
        &mut self,
        collection: CollectionKind,
        operation: Operation,
        id: Option<u32>,
        version: u64,
    ) {
        tracing::debug!(
            collection = %collection,
            op = operation.as_str(),
            id = ?id,
            version,
            "collection changed"
        );

        #[cfg(feature = "emitter")]
        self.notifier.publish(StoreChanged {
            collection,
            operation,
            version,
            id,
        });
    }
}
