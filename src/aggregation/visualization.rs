use indexmap::IndexMap;
use serde::Serialize;

use crate::record::{ExpeditionRecord, RiceRecord, SpiceRecord, TelecomRecord, TenantRecord};
use crate::store::StoreView;

use super::{first_word, mean, parse_amount, TimeScope};

/// Spices compared per view, taken from the head of the Makkah list.
const COMPARED_SPICES: usize = 6;

const SPICE_PREFIX: &str = "Bumbu ";

/// Bucket for tenants without a product type.
const OTHER_PRODUCT_TYPE: &str = "Lainnya";

/// Headroom above the largest tenant bucket for chart axes.
const FULL_MARK_HEADROOM: f64 = 1.2;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PriceComparison {
    pub name: String,
    pub makkah: f64,
    pub madinah: f64,
    pub avg: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpeditionTrendPoint {
    pub name: String,
    /// Scaled by the time scope.
    pub weight: f64,
    pub price_per_kg: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantRevenue {
    pub category: String,
    pub revenue: f64,
    pub full_mark: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RicePrice {
    pub vendor: String,
    pub price: f64,
    pub origin_price: f64,
}

/// Series and reference values for the analysis view.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationMetrics {
    pub scope: TimeScope,
    pub price_comparison: Vec<PriceComparison>,
    pub average_spice_price: f64,
    pub telecom_providers: Vec<String>,
    pub expedition_trend: Vec<ExpeditionTrendPoint>,
    pub average_expedition_income: f64,
    pub tenant_revenue: Vec<TenantRevenue>,
    pub rice_prices: Vec<RicePrice>,
    pub average_rice_price: f64,
}

impl VisualizationMetrics {
    pub fn compute(view: &StoreView, scope: TimeScope) -> Self {
        let price_comparison = price_comparison(&view.spice_makkah, &view.spice_madinah, scope);
        let rice_prices = rice_prices(&view.rice);

        Self {
            scope,
            average_spice_price: average_spice_price(&price_comparison),
            price_comparison,
            telecom_providers: telecom_providers(&view.telecom),
            expedition_trend: expedition_trend(&view.expedition, scope),
            average_expedition_income: average_expedition_income(&view.expedition),
            tenant_revenue: tenant_revenue(&view.tenant, scope),
            average_rice_price: average_rice_price(&rice_prices),
            rice_prices,
        }
    }
}

/// Join the first used Makkah spices with Madinah by exact name. A spice
/// missing in Madinah compares against `0`.
pub fn price_comparison(
    makkah: &[SpiceRecord],
    madinah: &[SpiceRecord],
    scope: TimeScope,
) -> Vec<PriceComparison> {
    let fluctuation = scope.price_fluctuation();

    makkah
        .iter()
        .filter(|spice| spice.is_used)
        .take(COMPARED_SPICES)
        .map(|spice| {
            let makkah_price = parse_amount(&spice.price) * fluctuation;
            let madinah_price = madinah
                .iter()
                .find(|other| other.name == spice.name)
                .map_or(0.0, |other| parse_amount(&other.price))
                * fluctuation;

            PriceComparison {
                name: spice
                    .name
                    .strip_prefix(SPICE_PREFIX)
                    .unwrap_or(&spice.name)
                    .to_string(),
                makkah: makkah_price,
                madinah: madinah_price,
                avg: (makkah_price + madinah_price) / 2.0,
            }
        })
        .collect()
}

/// Mean of the comparison's `avg` column.
pub fn average_spice_price(comparison: &[PriceComparison]) -> f64 {
    mean(comparison.iter().map(|row| row.avg))
}

pub fn telecom_providers(records: &[TelecomRecord]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.provider_name.clone())
        .collect()
}

pub fn expedition_trend(
    records: &[ExpeditionRecord],
    scope: TimeScope,
) -> Vec<ExpeditionTrendPoint> {
    records
        .iter()
        .map(|record| ExpeditionTrendPoint {
            name: first_word(&record.company_name).to_string(),
            weight: parse_amount(&record.weight) * scope.multiplier(),
            price_per_kg: parse_amount(&record.price_per_kg),
        })
        .collect()
}

/// `sum(price_per_kg * weight) / max(n, 1)`, unscaled.
pub fn average_expedition_income(records: &[ExpeditionRecord]) -> f64 {
    let income: f64 = records
        .iter()
        .map(|record| parse_amount(&record.price_per_kg) * parse_amount(&record.weight))
        .sum();
    income / records.len().max(1) as f64
}

/// Scaled rent per product type, in order of first appearance.
pub fn tenant_revenue(records: &[TenantRecord], scope: TimeScope) -> Vec<TenantRevenue> {
    let mut buckets: IndexMap<&str, f64> = IndexMap::new();
    for record in records {
        let category = match record.product_type.as_str() {
            "" => OTHER_PRODUCT_TYPE,
            other => other,
        };
        let rent = parse_amount(&record.rent_cost) * scope.multiplier();
        *buckets.entry(category).or_insert(0.0) += rent;
    }

    let largest = buckets.values().copied().fold(f64::NEG_INFINITY, f64::max);
    let full_mark = largest * FULL_MARK_HEADROOM;
    buckets
        .into_iter()
        .map(|(category, revenue)| TenantRevenue {
            category: category.to_string(),
            revenue,
            full_mark,
        })
        .collect()
}

/// Used rice vendors with a company name, most expensive first.
pub fn rice_prices(records: &[RiceRecord]) -> Vec<RicePrice> {
    let mut prices: Vec<RicePrice> = records
        .iter()
        .filter(|record| record.is_used && !record.company_name.is_empty())
        .map(|record| RicePrice {
            vendor: record.company_name.clone(),
            price: parse_amount(&record.price),
            origin_price: parse_amount(&record.product_price),
        })
        .collect();
    prices.sort_by(|a, b| b.price.total_cmp(&a.price));
    prices
}

pub fn average_rice_price(prices: &[RicePrice]) -> f64 {
    mean(prices.iter().map(|row| row.price))
}
