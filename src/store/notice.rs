use serde::{Deserialize, Serialize};

use super::CollectionKind;

/// Which store operation produced a change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    UpdateById,
    RemoveById,
    ReplaceAll,
    ResetIdentity,
    Seed,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::UpdateById => "update_by_id",
            Operation::RemoveById => "remove_by_id",
            Operation::ReplaceAll => "replace_all",
            Operation::ResetIdentity => "reset_identity",
            Operation::Seed => "seed",
        }
    }
}

/// Describes one mutation that changed a collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreChanged {
    pub collection: CollectionKind,
    pub operation: Operation,
    /// Collection version after the change.
    pub version: u64,
    /// Target record id, when the operation had one.
    pub id: Option<u32>,
}
