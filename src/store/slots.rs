//! Collection slots - typed keys for the seven collections held by the store.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::collection::Collection;
use crate::record::{
    ExpeditionRecord, ReadyToEatRecord, RiceRecord, SpiceRecord, TelecomRecord, TenantRecord,
    SurveyRecord,
};

/// Identifies one collection of the store at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    SpiceMakkah,
    SpiceMadinah,
    Rice,
    ReadyToEat,
    Expedition,
    Tenant,
    Telecom,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 7] = [
        CollectionKind::SpiceMakkah,
        CollectionKind::SpiceMadinah,
        CollectionKind::Rice,
        CollectionKind::ReadyToEat,
        CollectionKind::Expedition,
        CollectionKind::Tenant,
        CollectionKind::Telecom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKind::SpiceMakkah => "spice_makkah",
            CollectionKind::SpiceMadinah => "spice_madinah",
            CollectionKind::Rice => "rice",
            CollectionKind::ReadyToEat => "ready_to_eat",
            CollectionKind::Expedition => "expedition",
            CollectionKind::Tenant => "tenant",
            CollectionKind::Telecom => "telecom",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollectionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CollectionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown collection: {}", s))
    }
}

/// The seven collections owned by the store.
#[derive(Debug, Default)]
pub struct Collections {
    pub(crate) spice_makkah: Collection<SpiceRecord>,
    pub(crate) spice_madinah: Collection<SpiceRecord>,
    pub(crate) rice: Collection<RiceRecord>,
    pub(crate) ready_to_eat: Collection<ReadyToEatRecord>,
    pub(crate) expedition: Collection<ExpeditionRecord>,
    pub(crate) tenant: Collection<TenantRecord>,
    pub(crate) telecom: Collection<TelecomRecord>,
}

impl Collections {
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
}

/// Type-level key selecting one collection and its record type.
pub trait Slot: 'static {
    type Record: SurveyRecord;

    const KIND: CollectionKind;

    fn collection(collections: &Collections) -> &Collection<Self::Record>;

    fn collection_mut(collections: &mut Collections) -> &mut Collection<Self::Record>;
}

macro_rules! slot {
    ($(#[$doc:meta])* $name:ident, $record:ty, $kind:ident, $field:ident) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name;

        impl Slot for $name {
            type Record = $record;

            const KIND: CollectionKind = CollectionKind::$kind;

            fn collection(collections: &Collections) -> &Collection<$record> {
                &collections.$field
            }

            fn collection_mut(collections: &mut Collections) -> &mut Collection<$record> {
                &mut collections.$field
            }
        }
    };
}

slot!(
    /// Spices surveyed in Makkah.
    SpiceMakkah, SpiceRecord, SpiceMakkah, spice_makkah
);
slot!(
    /// Spices surveyed in Madinah.
    SpiceMadinah, SpiceRecord, SpiceMadinah, spice_madinah
);
slot!(Rice, RiceRecord, Rice, rice);
slot!(
    /// Ready-to-eat meal suppliers.
    ReadyToEat, ReadyToEatRecord, ReadyToEat, ready_to_eat
);
slot!(Expedition, ExpeditionRecord, Expedition, expedition);
slot!(Tenant, TenantRecord, Tenant, tenant);
slot!(Telecom, TelecomRecord, Telecom, telecom);
