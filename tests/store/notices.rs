use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use survey_store::{
    CollectionKind, IdentityField, Operation, StoreChanged, StoreConfig, SurveyStore, Telecom,
    TelecomRecordDraft, Tenant,
};

use crate::support::tenant;

fn recorder() -> (Arc<Mutex<Vec<StoreChanged>>>, impl Fn(StoreChanged) + Send + Sync + 'static) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    (seen, move |notice: StoreChanged| sink.lock().unwrap().push(notice))
}

#[test]
fn one_notice_per_successful_mutation() {
    let mut store = SurveyStore::seeded();
    let (seen, listener) = recorder();
    store.on_change(listener);

    store.records::<Tenant>().add(tenant("Baru", "Kurma", "100"));
    store.records::<Tenant>().remove_by_id(42);
    store
        .records::<Telecom>()
        .replace_all(IdentityField::HotelName, "Hotel Makkah");

    // EventEmitter is async, give it time
    thread::sleep(Duration::from_millis(50));
    let mut seen = seen.lock().unwrap().clone();
    seen.sort_by_key(|notice| notice.collection);

    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].collection, CollectionKind::Tenant);
    assert_eq!(seen[0].operation, Operation::Add);
    assert_eq!(seen[0].id, Some(6));
    assert_eq!(seen[1].collection, CollectionKind::Telecom);
    assert_eq!(seen[1].operation, Operation::ReplaceAll);
}

#[test]
fn collection_listener_filters_by_slot() {
    let mut store = SurveyStore::seeded();
    let (seen, listener) = recorder();
    store.on_collection_change(CollectionKind::Telecom, listener);

    store.records::<Tenant>().add(tenant("Baru", "Kurma", "100"));
    let snapshot = store
        .records::<Telecom>()
        .add(TelecomRecordDraft::new("Mobily", "Hajj SIM", "90"));

    thread::sleep(Duration::from_millis(50));
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].version, snapshot.version());
}

#[test]
fn notices_can_be_switched_off() {
    let config = StoreConfig::from_toml_str("emit_changes = false\n").unwrap();
    let mut store = SurveyStore::from_config(&config).unwrap();
    let (seen, listener) = recorder();
    store.on_change(listener);

    store.records::<Tenant>().add(tenant("Baru", "Kurma", "100"));

    thread::sleep(Duration::from_millis(50));
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn identity_reset_is_announced() {
    let mut store = SurveyStore::seeded();
    let (seen, listener) = recorder();
    store.on_collection_change(CollectionKind::Tenant, listener);

    let snapshot = store.records::<Tenant>().reset_identity();

    thread::sleep(Duration::from_millis(50));
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].operation, Operation::ResetIdentity);
    assert_eq!(seen[0].id, None);
    assert_eq!(seen[0].version, snapshot.version());
}
