use serde::{Deserialize, Serialize};
use survey_store_macros::SurveyRecord;

use super::Activatable;
use crate::identity::SurveyIdentity;

/// One spice SKU surveyed in a region.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, SurveyRecord)]
#[survey(collection = "spices")]
#[serde(rename_all = "camelCase")]
pub struct SpiceRecord {
    pub id: u32,
    pub name: String,
    /// Price in SAR.
    pub price: String,
    /// Volume in tons.
    pub volume: String,
    pub is_used: bool,
    #[serde(flatten)]
    pub identity: SurveyIdentity,
}

/// One rice vendor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, SurveyRecord)]
#[survey(collection = "rice")]
#[serde(rename_all = "camelCase")]
pub struct RiceRecord {
    pub id: u32,
    pub company_name: String,
    /// Selling price in SAR.
    pub price: String,
    /// Price at origin in SAR.
    pub product_price: String,
    /// Volume in tons.
    pub volume: String,
    pub is_used: bool,
    #[serde(flatten)]
    pub identity: SurveyIdentity,
}

/// One ready-to-eat meal supplier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, SurveyRecord)]
#[survey(collection = "ready_to_eat")]
#[serde(rename_all = "camelCase")]
pub struct ReadyToEatRecord {
    pub id: u32,
    pub company_name: String,
    pub menu: String,
    pub price: String,
    /// Portions.
    pub volume: String,
    pub is_used: bool,
    #[serde(flatten)]
    pub identity: SurveyIdentity,
}

/// One expedition (cargo) company.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, SurveyRecord)]
#[survey(collection = "expeditions")]
#[serde(rename_all = "camelCase")]
pub struct ExpeditionRecord {
    pub id: u32,
    pub company_name: String,
    pub price_per_kg: String,
    /// Weight in kg.
    pub weight: String,
    #[serde(flatten)]
    pub identity: SurveyIdentity,
}

/// One tenant shop in a hotel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, SurveyRecord)]
#[survey(collection = "tenants")]
#[serde(rename_all = "camelCase")]
pub struct TenantRecord {
    pub id: u32,
    pub shop_name: String,
    pub product_type: String,
    pub best_seller: String,
    /// Rent in SAR.
    pub rent_cost: String,
    #[serde(flatten)]
    pub identity: SurveyIdentity,
}

/// One telecom provider offering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, SurveyRecord)]
#[survey(collection = "telecom")]
#[serde(rename_all = "camelCase")]
pub struct TelecomRecord {
    pub id: u32,
    pub provider_name: String,
    pub package_name: String,
    pub price: String,
    #[serde(flatten)]
    pub identity: SurveyIdentity,
}

impl Activatable for SpiceRecord {
    fn is_used(&self) -> bool {
        self.is_used
    }
}

impl Activatable for RiceRecord {
    fn is_used(&self) -> bool {
        self.is_used
    }
}

impl Activatable for ReadyToEatRecord {
    fn is_used(&self) -> bool {
        self.is_used
    }
}

impl SpiceRecordDraft {
    /// An active spice line item.
    pub fn new(name: &str, price: &str, volume: &str) -> Self {
        Self {
            name: name.to_string(),
            price: price.to_string(),
            volume: volume.to_string(),
            is_used: true,
        }
    }
}

impl RiceRecordDraft {
    /// An active rice line item.
    pub fn new(company_name: &str, price: &str, product_price: &str, volume: &str) -> Self {
        Self {
            company_name: company_name.to_string(),
            price: price.to_string(),
            product_price: product_price.to_string(),
            volume: volume.to_string(),
            is_used: true,
        }
    }
}

impl ReadyToEatRecordDraft {
    /// An active ready-to-eat line item.
    pub fn new(company_name: &str, menu: &str, price: &str, volume: &str) -> Self {
        Self {
            company_name: company_name.to_string(),
            menu: menu.to_string(),
            price: price.to_string(),
            volume: volume.to_string(),
            is_used: true,
        }
    }
}

impl ExpeditionRecordDraft {
    pub fn new(company_name: &str, price_per_kg: &str, weight: &str) -> Self {
        Self {
            company_name: company_name.to_string(),
            price_per_kg: price_per_kg.to_string(),
            weight: weight.to_string(),
        }
    }
}

impl TenantRecordDraft {
    pub fn new(shop_name: &str, product_type: &str, best_seller: &str, rent_cost: &str) -> Self {
        Self {
            shop_name: shop_name.to_string(),
            product_type: product_type.to_string(),
            best_seller: best_seller.to_string(),
            rent_cost: rent_cost.to_string(),
        }
    }
}

impl TelecomRecordDraft {
    pub fn new(provider_name: &str, package_name: &str, price: &str) -> Self {
        Self {
            provider_name: provider_name.to_string(),
            package_name: package_name.to_string(),
            price: price.to_string(),
        }
    }
}
