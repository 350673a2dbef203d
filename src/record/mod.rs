//! Survey records - one line item in a category collection.
//!
//! Record structs derive [`SurveyRecord`](survey_store_macros::SurveyRecord),
//! which generates the per-record `Field` enum and `Draft` payload.
//!
//! ## Example
//!
//! ```ignore
//! use survey_store::{SurveyIdentity, SurveyRecord};
//!
//! #[derive(Clone, Debug, PartialEq, Serialize, Deserialize, SurveyRecord)]
//! #[survey(collection = "tenants")]
//! struct TenantRecord {
//!     pub id: u32,
//!     pub shop_name: String,
//!     pub rent_cost: String,
//!     #[serde(flatten)]
//!     pub identity: SurveyIdentity,
//! }
//! ```

mod categories;

use serde::{de::DeserializeOwned, Serialize};

use crate::identity::SurveyIdentity;

pub use categories::{
    ExpeditionRecord, ExpeditionRecordDraft, ExpeditionRecordField, ReadyToEatRecord,
    ReadyToEatRecordDraft, ReadyToEatRecordField, RiceRecord, RiceRecordDraft, RiceRecordField,
    SpiceRecord, SpiceRecordDraft, SpiceRecordField, TelecomRecord, TelecomRecordDraft,
    TelecomRecordField, TenantRecord, TenantRecordDraft, TenantRecordField,
};

/// Trait for types stored in a survey collection.
pub trait SurveyRecord: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Single-field assignment applied by `update_by_id`.
    type Field: Clone + std::fmt::Debug;

    /// Line-item payload accepted by `add`.
    type Draft: Clone + Default;

    /// Collection name, used in logs and change notices.
    const COLLECTION: &'static str;

    fn id(&self) -> u32;

    fn identity(&self) -> &SurveyIdentity;

    fn identity_mut(&mut self) -> &mut SurveyIdentity;

    /// Build a full record from an allocated id, the collection's current
    /// identity and a draft.
    fn from_draft(id: u32, identity: SurveyIdentity, draft: Self::Draft) -> Self;

    /// Apply one field assignment, leaving every other field untouched.
    fn apply(&mut self, field: Self::Field);

    fn field_name(field: &Self::Field) -> &'static str;
}

/// Records carrying the `is_used` activation flag.
///
/// Inactive records stay in their collection but are excluded from every
/// filtered aggregate.
pub trait Activatable {
    fn is_used(&self) -> bool;
}
