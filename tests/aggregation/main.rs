//! Integration tests for metrics derived from a populated store.

mod scaling;

use survey_store::{
    display, Expedition, ExpeditionRecordDraft, Rice, RiceRecordDraft, RiceRecordField,
    SpiceMadinah, SpiceMakkah, SpiceRecordDraft, SpiceRecordField, SurveyStore, Telecom, Tenant,
    TenantRecordDraft, TimeScope,
};

fn store_with_weights(weights: &[&str]) -> SurveyStore {
    let mut store = SurveyStore::new();
    store.set_loading(false);
    let mut cargo = store.records::<Expedition>();
    for (i, weight) in weights.iter().enumerate() {
        cargo.add(ExpeditionRecordDraft::new(&format!("Kargo {i}"), "10", weight));
    }
    store
}

#[test]
fn cargo_weight_end_to_end() {
    let store = store_with_weights(&["100", "bad"]);
    let view = store.ready_view().unwrap();

    assert_eq!(view.dashboard(TimeScope::All).cargo_weight, 100.0);
    assert_eq!(view.dashboard(TimeScope::Today).cargo_weight, 5.0);
}

#[test]
fn unused_records_leave_filtered_sums() {
    let mut store = SurveyStore::new();
    let mut rice = store.records::<Rice>();
    rice.add(RiceRecordDraft::new("Al Walimah", "95", "80", "120"));
    rice.add(RiceRecordDraft::new("Abu Kass", "110", "92", "85"));
    rice.update_by_id(2, RiceRecordField::IsUsed(false));

    let view = store.view();
    let dashboard = view.dashboard(TimeScope::All);
    assert_eq!(dashboard.rice_volume, 120.0);

    let visualization = view.visualization(TimeScope::All);
    assert_eq!(visualization.rice_prices.len(), 1);
    assert_eq!(visualization.average_rice_price, 95.0);
}

#[test]
fn malformed_numbers_contribute_zero() {
    let mut store = SurveyStore::new();
    let mut tenants = store.records::<Tenant>();
    tenants.add(TenantRecordDraft::new("A", "Kurma", "", "1500"));
    tenants.add(TenantRecordDraft::new("B", "Kurma", "", "sewa"));
    tenants.add(TenantRecordDraft::new("C", "Kurma", "", ""));

    let view = store.view();
    assert_eq!(view.dashboard(TimeScope::All).tenant_revenue, 1500.0);
    assert_eq!(view.visualization(TimeScope::All).tenant_revenue[0].revenue, 1500.0);
}

#[test]
fn non_numeric_prices_count_as_zero() {
    let mut store = SurveyStore::new();
    store
        .records::<SpiceMakkah>()
        .add(SpiceRecordDraft::new("Bumbu Kari", "abc", "1"));
    store
        .records::<SpiceMakkah>()
        .add(SpiceRecordDraft::new("Bumbu Soto", "20", "1"));
    store
        .records::<SpiceMadinah>()
        .add(SpiceRecordDraft::new("Bumbu Kari", "10", "1"));

    let mut rice = store.records::<Rice>();
    rice.add(RiceRecordDraft::new("Al Walimah", "n/a", "80", "1"));
    rice.add(RiceRecordDraft::new("Abu Kass", "110", "92", "1"));

    let mut cargo = store.records::<Expedition>();
    cargo.add(ExpeditionRecordDraft::new("Zamzam Cargo", "bad", "100"));
    cargo.add(ExpeditionRecordDraft::new("Kargo Cepat", "10", "50"));

    let metrics = store.view().visualization(TimeScope::All);

    let kari = &metrics.price_comparison[0];
    assert_eq!((kari.name.as_str(), kari.makkah, kari.madinah), ("Kari", 0.0, 10.0));
    assert_eq!(kari.avg, 5.0);
    assert_eq!(metrics.price_comparison[1].avg, 10.0);
    assert_eq!(metrics.average_spice_price, 7.5);

    // The unreadable rice price stays in the mean as 0.
    assert_eq!(metrics.rice_prices.len(), 2);
    assert_eq!(metrics.rice_prices[1].vendor, "Al Walimah");
    assert_eq!(metrics.rice_prices[1].price, 0.0);
    assert_eq!(metrics.average_rice_price, 55.0);

    assert_eq!(metrics.average_expedition_income, (0.0 * 100.0 + 10.0 * 50.0) / 2.0);
}

#[test]
fn metrics_follow_store_changes() {
    let mut store = SurveyStore::seeded();
    let before = store.view().visualization(TimeScope::All);

    store
        .records::<SpiceMakkah>()
        .update_by_id(1, SpiceRecordField::Price("30".into()));
    store
        .records::<SpiceMakkah>()
        .add(SpiceRecordDraft::new("Bumbu Baru", "10", "1"));
    store.records::<Telecom>().remove_by_id(4);

    let after = store.view().visualization(TimeScope::All);
    assert_eq!(after.price_comparison[0].makkah, 30.0);
    assert_eq!(after.price_comparison.len(), 6);
    assert!(after.average_spice_price > before.average_spice_price);
    assert_eq!(after.telecom_providers.len(), 3);
}

#[test]
fn display_rounding_is_left_to_consumers() {
    let store = SurveyStore::seeded();
    let metrics = store.view().dashboard(TimeScope::Today);

    assert_eq!(metrics.cargo_weight, 6510.0 * 0.05);
    assert_eq!(display::floor(metrics.cargo_weight), 325.0);
    assert_eq!(display::round_to(metrics.spice_volume, 1), 1.3);
}

#[test]
fn metrics_export_as_json() {
    let metrics = SurveyStore::seeded().view().dashboard(TimeScope::Week);
    let json = serde_json::to_value(&metrics).unwrap();

    assert_eq!(json["scope"], "week");
    assert_eq!(json["telecomProviders"], 4);
    assert_eq!(json["activity"][2]["kind"], "rice");
}
