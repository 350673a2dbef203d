//! Seed data - the initial contents of every collection.
//!
//! Seeds are either the built-in sample set or a JSON document whose keys
//! follow the record field names in camelCase:
//!
//! ```json
//! {
//!   "spiceMakkah": [
//!     { "id": 1, "name": "Bumbu Kari", "price": "20", "volume": "4", "isUsed": true }
//!   ],
//!   "tenant": [
//!     { "id": 1, "shopName": "Toko Amanah", "productType": "Kurma",
//!       "bestSeller": "Ajwa", "rentCost": "1500" }
//!   ]
//! }
//! ```
//!
//! Missing collections default to empty; identity keys default to empty strings.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SeedError;
use crate::identity::SurveyIdentity;
use crate::record::{
    ExpeditionRecord, ExpeditionRecordDraft, ReadyToEatRecord, ReadyToEatRecordDraft, RiceRecord,
    RiceRecordDraft, SpiceRecord, SpiceRecordDraft, SurveyRecord, TelecomRecord,
    TelecomRecordDraft, TenantRecord, TenantRecordDraft,
};
use crate::store::CollectionKind;

/// Initial records for all seven collections.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeedData {
    pub spice_makkah: Vec<SpiceRecord>,
    pub spice_madinah: Vec<SpiceRecord>,
    pub rice: Vec<RiceRecord>,
    pub ready_to_eat: Vec<ReadyToEatRecord>,
    pub expedition: Vec<ExpeditionRecord>,
    pub tenant: Vec<TenantRecord>,
    pub telecom: Vec<TelecomRecord>,
}

impl SeedData {
    /// No records at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a JSON seed document and check id uniqueness.
    pub fn from_json_str(json: &str) -> Result<Self, SeedError> {
        let seed: SeedData = serde_json::from_str(json)?;
        seed.validate()?;
        Ok(seed)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Every collection must hold unique ids below `u32::MAX`.
    pub fn validate(&self) -> Result<(), SeedError> {
        check_ids(CollectionKind::SpiceMakkah, &self.spice_makkah)?;
        check_ids(CollectionKind::SpiceMadinah, &self.spice_madinah)?;
        check_ids(CollectionKind::Rice, &self.rice)?;
        check_ids(CollectionKind::ReadyToEat, &self.ready_to_eat)?;
        check_ids(CollectionKind::Expedition, &self.expedition)?;
        check_ids(CollectionKind::Tenant, &self.tenant)?;
        check_ids(CollectionKind::Telecom, &self.telecom)?;
        Ok(())
    }

    pub fn record_count(&self) -> usize {
        self.spice_makkah.len()
            + self.spice_madinah.len()
            + self.rice.len()
            + self.ready_to_eat.len()
            + self.expedition.len()
            + self.tenant.len()
            + self.telecom.len()
    }

    /// Built-in sample set used when no seed file is configured.
    pub fn builtin() -> Self {
        SeedData {
            spice_makkah: numbered(vec![
                SpiceRecordDraft::new("Bumbu Kari", "22", "4.5"),
                SpiceRecordDraft::new("Bumbu Rendang", "28", "3.2"),
                SpiceRecordDraft::new("Bumbu Opor", "19", "2.8"),
                SpiceRecordDraft::new("Bumbu Soto", "17", "2.1"),
                SpiceRecordDraft::new("Bumbu Gulai", "24", "1.9"),
                SpiceRecordDraft::new("Bumbu Nasi Goreng", "15", "3.6"),
                SpiceRecordDraft {
                    is_used: false,
                    ..SpiceRecordDraft::new("Bumbu Rawon", "26", "0.7")
                },
            ]),
            spice_madinah: numbered(vec![
                SpiceRecordDraft::new("Bumbu Kari", "23", "3.1"),
                SpiceRecordDraft::new("Bumbu Rendang", "27", "2.4"),
                SpiceRecordDraft::new("Bumbu Opor", "20", "1.6"),
                SpiceRecordDraft::new("Bumbu Gulai", "25", "1.2"),
            ]),
            rice: numbered(vec![
                RiceRecordDraft::new("Al Walimah", "95", "80", "120"),
                RiceRecordDraft::new("Abu Kass", "110", "92", "85"),
                RiceRecordDraft::new("Tilda Basmati", "130", "105", "40"),
                RiceRecordDraft::new("Beras Pandan Wangi", "88", "70", "150"),
            ]),
            ready_to_eat: numbered(vec![
                ReadyToEatRecordDraft::new("PT Sari Rasa Nusantara", "Nasi Rendang", "18", "12000"),
                ReadyToEatRecordDraft::new("PT Boga Haji Mandiri", "Nasi Kari Ayam", "17", "9500"),
                ReadyToEatRecordDraft::new("PT Dapur Mekah", "Nasi Opor", "16", "7000"),
            ]),
            expedition: numbered(vec![
                ExpeditionRecordDraft::new("Zamzam Cargo Express", "12", "2400"),
                ExpeditionRecordDraft::new("Amanah Logistik", "10", "1800"),
                ExpeditionRecordDraft::new("Barokah Kargo", "11", "1350"),
                ExpeditionRecordDraft::new("Haramain Shipping", "14", "960"),
            ]),
            tenant: numbered(vec![
                TenantRecordDraft::new("Toko Amanah", "Kurma", "Ajwa", "1500"),
                TenantRecordDraft::new("Safa Gifts", "Oleh-oleh", "Tasbih", "1200"),
                TenantRecordDraft::new("Marwah Fashion", "Pakaian", "Gamis", "1800"),
                TenantRecordDraft::new("Kurma Barakah", "Kurma", "Sukari", "1300"),
                TenantRecordDraft::new("Zam Zam Mart", "Kebutuhan Harian", "Air Mineral", "900"),
            ]),
            telecom: numbered(vec![
                TelecomRecordDraft::new("Telkomsel", "RoaMAX Haji", "450"),
                TelecomRecordDraft::new("Indosat", "Paket Haji", "400"),
                TelecomRecordDraft::new("XL Axiata", "Roaming Haji", "380"),
                TelecomRecordDraft::new("STC", "Visitor SIM", "120"),
            ]),
        }
    }
}

fn numbered<R: SurveyRecord>(drafts: Vec<R::Draft>) -> Vec<R> {
    drafts
        .into_iter()
        .zip(1u32..)
        .map(|(draft, id)| R::from_draft(id, SurveyIdentity::default(), draft))
        .collect()
}

fn check_ids<R: SurveyRecord>(
    collection: CollectionKind,
    records: &[R],
) -> Result<(), SeedError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if record.id() == u32::MAX {
            return Err(SeedError::IdOutOfRange {
                collection,
                id: record.id(),
            });
        }
        if !seen.insert(record.id()) {
            return Err(SeedError::DuplicateId {
                collection,
                id: record.id(),
            });
        }
    }
    Ok(())
}
