//! Aggregation engine - metrics derived from a [`StoreView`] and a
//! [`TimeScope`].
//!
//! Everything here is a pure function of its inputs. Nothing is cached; call
//! again after the store changes. Numeric fields are read with
//! [`parse_amount`], so malformed text contributes `0` and never fails.
//!
//! [`StoreView`]: crate::store::StoreView

mod dashboard;
pub mod display;
mod numeric;
mod scope;
mod visualization;

use crate::record::Activatable;

pub use dashboard::{
    expedition_by_company, rte_share, ActivityEntry, ActivityKind, DashboardMetrics, LabeledValue,
};
pub use numeric::parse_amount;
pub use scope::TimeScope;
pub use visualization::{
    average_expedition_income, average_rice_price, average_spice_price, expedition_trend,
    price_comparison, rice_prices, telecom_providers, tenant_revenue, ExpeditionTrendPoint,
    PriceComparison, RicePrice, TenantRevenue, VisualizationMetrics,
};

/// Sum a numeric field over every record, scaled by `scope`.
pub fn scaled_sum<R>(records: &[R], scope: TimeScope, value: impl Fn(&R) -> &str) -> f64 {
    let total: f64 = records.iter().map(|record| parse_amount(value(record))).sum();
    total * scope.multiplier()
}

/// Sum a numeric field over the records in use, scaled by `scope`.
pub fn filtered_sum<R: Activatable>(
    records: &[R],
    scope: TimeScope,
    value: impl Fn(&R) -> &str,
) -> f64 {
    let total: f64 = records
        .iter()
        .filter(|record| record.is_used())
        .map(|record| parse_amount(value(record)))
        .sum();
    total * scope.multiplier()
}

/// Short label for a company: its first word.
pub(crate) fn first_word(name: &str) -> &str {
    name.split(' ').next().unwrap_or_default()
}

fn mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
