use serde::Serialize;

use crate::record::{ExpeditionRecord, ReadyToEatRecord, RiceRecord};
use crate::store::StoreView;

use super::{filtered_sum, first_word, parse_amount, scaled_sum, TimeScope};

/// One labelled point of a per-record series.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LabeledValue {
    pub label: String,
    pub value: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    ReadyToEat,
    Rice,
}

/// Recent-input feed entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub title: String,
    pub detail: String,
}

/// Headline figures and small series for the summary dashboard.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub scope: TimeScope,
    /// Used spice volume across both regions.
    pub spice_volume: f64,
    pub rice_volume: f64,
    pub ready_to_eat_volume: f64,
    pub cargo_weight: f64,
    pub tenant_revenue: f64,
    /// Registry size, never scaled.
    pub telecom_providers: usize,
    pub ready_to_eat_share: Vec<LabeledValue>,
    pub expedition_by_company: Vec<LabeledValue>,
    pub activity: Vec<ActivityEntry>,
}

impl DashboardMetrics {
    pub fn compute(view: &StoreView, scope: TimeScope) -> Self {
        let spice_volume = filtered_sum(&view.spice_makkah, scope, |r| &r.volume)
            + filtered_sum(&view.spice_madinah, scope, |r| &r.volume);

        Self {
            scope,
            spice_volume,
            rice_volume: filtered_sum(&view.rice, scope, |r| &r.volume),
            ready_to_eat_volume: filtered_sum(&view.ready_to_eat, scope, |r| &r.volume),
            cargo_weight: scaled_sum(&view.expedition, scope, |r| &r.weight),
            tenant_revenue: scaled_sum(&view.tenant, scope, |r| &r.rent_cost),
            telecom_providers: view.telecom.len(),
            ready_to_eat_share: rte_share(&view.ready_to_eat, scope),
            expedition_by_company: expedition_by_company(&view.expedition, scope),
            activity: activity_feed(&view.ready_to_eat, &view.rice),
        }
    }
}

/// Scaled volume per ready-to-eat vendor, used records with a company only.
pub fn rte_share(records: &[ReadyToEatRecord], scope: TimeScope) -> Vec<LabeledValue> {
    records
        .iter()
        .filter(|r| r.is_used && !r.company_name.is_empty())
        .map(|r| LabeledValue {
            label: r.company_name.clone(),
            value: parse_amount(&r.volume) * scope.multiplier(),
        })
        .collect()
}

/// Scaled cargo weight per expedition record, labelled by the company's
/// first word.
pub fn expedition_by_company(records: &[ExpeditionRecord], scope: TimeScope) -> Vec<LabeledValue> {
    records
        .iter()
        .map(|r| LabeledValue {
            label: first_word(&r.company_name).to_string(),
            value: parse_amount(&r.weight) * scope.multiplier(),
        })
        .collect()
}

fn activity_feed(ready_to_eat: &[ReadyToEatRecord], rice: &[RiceRecord]) -> Vec<ActivityEntry> {
    let meals = ready_to_eat.iter().take(2).map(|r| ActivityEntry {
        kind: ActivityKind::ReadyToEat,
        title: format!("Input RTE: {}", r.company_name),
        detail: r.menu.clone(),
    });
    let stock = rice.iter().take(1).map(|r| ActivityEntry {
        kind: ActivityKind::Rice,
        title: format!("Stok Beras: {}", r.company_name),
        detail: format!("{} Ton", r.volume),
    });
    meals.chain(stock).collect()
}
