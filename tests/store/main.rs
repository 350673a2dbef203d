//! Integration tests for the collection store: id allocation, no-op
//! semantics, identity propagation and change notices.

mod propagation;
#[cfg(feature = "emitter")]
mod notices;

use survey_store::{LoadState, Rice, SpiceMakkah, SurveyStore, Tenant, TenantRecordField};
use support::{empty_store, init_tracing, tenant};

#[test]
fn store_lifecycle() {
    init_tracing();
    let mut store = SurveyStore::new();
    assert_eq!(store.state(), LoadState::Loading);
    assert!(store.ready_view().is_none());

    store.load_seed(survey_store::SeedData::builtin());
    assert_eq!(store.state(), LoadState::Ready);

    store.set_loading(true);
    assert_eq!(store.state(), LoadState::Ready);
    assert_eq!(store.collection::<SpiceMakkah>().len(), 7);
}

#[test]
fn earlier_snapshots_are_isolated() {
    init_tracing();
    let mut store = empty_store();
    let before = store.records::<Tenant>().add(tenant("Toko Amanah", "Kurma", "1500"));
    let view_before = store.view();

    store
        .records::<Tenant>()
        .update_by_id(1, TenantRecordField::RentCost("2000".into()));
    store.records::<Tenant>().add(tenant("Safa Gifts", "Oleh-oleh", "900"));

    assert_eq!(before.len(), 1);
    assert_eq!(before[0].rent_cost, "1500");
    assert_eq!(view_before.tenant.len(), 1);

    let after = store.snapshot::<Tenant>();
    assert_eq!(after.len(), 2);
    assert_eq!(after[0].rent_cost, "2000");
    assert!(!before.ptr_eq(&after));
}

#[test]
fn view_reports_changed_collections() {
    let mut store = SurveyStore::seeded();
    let earlier = store.view();

    store.records::<Tenant>().remove_by_id(1);
    let later = store.view();

    assert_eq!(later.changed_since(&earlier), vec![survey_store::CollectionKind::Tenant]);
    assert!(later.rice.ptr_eq(&store.snapshot::<Rice>()));
}
