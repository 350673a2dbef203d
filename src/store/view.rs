use crate::aggregation::{DashboardMetrics, TimeScope, VisualizationMetrics};
use crate::collection::Snapshot;
use crate::record::{
    ExpeditionRecord, ReadyToEatRecord, RiceRecord, SpiceRecord, TelecomRecord, TenantRecord,
};

use super::{CollectionKind, Collections};

/// One snapshot per collection, taken at the same moment.
///
/// This is what dashboard and visualization consumers read; it never changes
/// after creation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StoreView {
    pub spice_makkah: Snapshot<SpiceRecord>,
    pub spice_madinah: Snapshot<SpiceRecord>,
    pub rice: Snapshot<RiceRecord>,
    pub ready_to_eat: Snapshot<ReadyToEatRecord>,
    pub expedition: Snapshot<ExpeditionRecord>,
    pub tenant: Snapshot<TenantRecord>,
    pub telecom: Snapshot<TelecomRecord>,
}

impl StoreView {
    pub(crate) fn from_collections(collections: &Collections) -> Self {
        Self {
            spice_makkah: collections.spice_makkah.snapshot(),
            spice_madinah: collections.spice_madinah.snapshot(),
            rice: collections.rice.snapshot(),
            ready_to_eat: collections.ready_to_eat.snapshot(),
            expedition: collections.expedition.snapshot(),
            tenant: collections.tenant.snapshot(),
            telecom: collections.telecom.snapshot(),
        }
    }

    pub fn version(&self, kind: CollectionKind) -> u64 {
        match kind {
            CollectionKind::SpiceMakkah => self.spice_makkah.version(),
            CollectionKind::SpiceMadinah => self.spice_madinah.version(),
            CollectionKind::Rice => self.rice.version(),
            CollectionKind::ReadyToEat => self.ready_to_eat.version(),
            CollectionKind::Expedition => self.expedition.version(),
            CollectionKind::Tenant => self.tenant.version(),
            CollectionKind::Telecom => self.telecom.version(),
        }
    }

    /// Collections whose version differs from `earlier`.
    pub fn changed_since(&self, earlier: &StoreView) -> Vec<CollectionKind> {
        CollectionKind::ALL
            .into_iter()
            .filter(|kind| self.version(*kind) != earlier.version(*kind))
            .collect()
    }

    pub fn dashboard(&self, scope: TimeScope) -> DashboardMetrics {
        DashboardMetrics::compute(self, scope)
    }

    pub fn visualization(&self, scope: TimeScope) -> VisualizationMetrics {
        VisualizationMetrics::compute(self, scope)
    }
}
