// Lets derive output name `survey_store::...` from inside this crate.
extern crate self as survey_store;

pub mod aggregation;
mod collection;
mod config;
#[cfg(feature = "emitter")]
mod emitter;
mod error;
mod identity;
mod record;
mod seed;
mod store;

pub use survey_store_macros::SurveyRecord;

pub use aggregation::{
    display, filtered_sum, parse_amount, scaled_sum, ActivityEntry, ActivityKind,
    DashboardMetrics, ExpeditionTrendPoint, LabeledValue, PriceComparison, RicePrice,
    TenantRevenue, TimeScope, VisualizationMetrics,
};
pub use collection::{Collection, Snapshot};
pub use config::{SeedConfig, SeedSource, StoreConfig};
pub use error::{ConfigError, SeedError, StoreError};
pub use identity::{
    date_to_edit, date_to_storage, time_to_edit, time_to_storage, IdentityField, IdentityInput,
    SurveyIdentity,
};
pub use record::{
    Activatable, ExpeditionRecord, ExpeditionRecordDraft, ExpeditionRecordField,
    ReadyToEatRecord, ReadyToEatRecordDraft, ReadyToEatRecordField, RiceRecord, RiceRecordDraft,
    RiceRecordField, SpiceRecord, SpiceRecordDraft, SpiceRecordField, SurveyRecord,
    TelecomRecord, TelecomRecordDraft, TelecomRecordField, TenantRecord, TenantRecordDraft,
    TenantRecordField,
};
pub use seed::SeedData;
pub use store::{
    CollectionKind, Collections, Expedition, LoadState, Operation, ReadyToEat, RecordRepository,
    Rice, Slot, SpiceMadinah, SpiceMakkah, StoreChanged, StoreView, SurveyStore, Telecom, Tenant,
};

#[cfg(feature = "emitter")]
pub use emitter::ChangeNotifier;
