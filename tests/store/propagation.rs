use survey_store::{
    IdentityField, IdentityInput, SpiceMadinah, SpiceMakkah, SurveyIdentity, SurveyStore, Tenant,
    TenantRecordField,
};

use crate::support::{empty_store, spice, tenant};

#[test]
fn propagation_on_empty_collection_reaches_later_adds() {
    let mut store = empty_store();
    let snapshot = store
        .records::<Tenant>()
        .replace_all(IdentityField::HotelName, "Hotel Al Safwah");
    assert!(snapshot.is_empty());

    let snapshot = store.records::<Tenant>().add(tenant("Toko Amanah", "Kurma", "1500"));
    assert_eq!(snapshot[0].identity.hotel_name, "Hotel Al Safwah");
}

#[test]
fn propagation_on_one_record() {
    let mut store = empty_store();
    store.records::<Tenant>().add(tenant("Toko Amanah", "Kurma", "1500"));
    let snapshot = store
        .records::<Tenant>()
        .replace_all(IdentityField::Sector, "Sektor 3");
    assert_eq!(snapshot[0].identity.sector, "Sektor 3");
}

#[test]
fn propagation_overwrites_every_record() {
    let mut store = SurveyStore::seeded();
    let mut spices = store.records::<SpiceMakkah>();
    spices.replace_all(IdentityField::Surveyor, "Ahmad");
    let snapshot = spices.replace_all(IdentityField::Surveyor, "Siti");

    assert_eq!(snapshot.len(), 7);
    assert!(snapshot.iter().all(|r| r.identity.surveyor == "Siti"));
    assert_eq!(store.collection::<SpiceMakkah>().identity().surveyor, "Siti");

    // Other collections, even of the same record type, are untouched.
    assert!(store
        .snapshot::<SpiceMadinah>()
        .iter()
        .all(|r| r.identity.surveyor.is_empty()));
}

#[test]
fn edit_identity_converts_to_storage_format() {
    let mut store = empty_store();
    let mut spices = store.records::<SpiceMadinah>();
    spices.add(spice("Bumbu Kari", "23", "3.1"));
    spices.edit_identity(IdentityInput::Date("2026-05-14".into()));
    let snapshot = spices.edit_identity(IdentityInput::Time("07:45".into()));

    assert_eq!(snapshot[0].identity.date, "14/05/2026");
    assert_eq!(snapshot[0].identity.time, "07.45");
    assert_eq!(snapshot[0].identity.edit_date(), "2026-05-14");
    assert_eq!(snapshot[0].identity.edit_time(), "07:45");
}

#[test]
fn field_updates_keep_identity() {
    let mut store = empty_store();
    let mut tenants = store.records::<Tenant>();
    tenants.replace_all(IdentityField::Address, "Jl. Ibrahim Al Khalil");
    tenants.add(tenant("Toko Amanah", "Kurma", "1500"));
    let snapshot = tenants.update_by_id(1, TenantRecordField::ShopName("Toko Amanah Jaya".into()));

    assert_eq!(snapshot[0].shop_name, "Toko Amanah Jaya");
    assert_eq!(snapshot[0].identity.address, "Jl. Ibrahim Al Khalil");
}

#[test]
fn reset_identity_blanks_only_later_adds() {
    let mut store = empty_store();
    let mut tenants = store.records::<Tenant>();
    tenants.edit_identity(IdentityInput::HotelName("Hotel Al Safwah".into()));
    tenants.edit_identity(IdentityInput::Date("2026-05-14".into()));
    tenants.add(tenant("Toko Amanah", "Kurma", "1500"));

    let before = tenants.snapshot();
    let reset = tenants.reset_identity();
    assert_eq!(reset, before);
    assert_eq!(reset.version(), before.version() + 1);
    assert_eq!(reset[0].identity.hotel_name, "Hotel Al Safwah");
    assert_eq!(reset[0].identity.date, "14/05/2026");

    let snapshot = tenants.add(tenant("Safa Gifts", "Oleh-oleh", "900"));
    assert_eq!(snapshot[0].identity.hotel_name, "Hotel Al Safwah");
    assert_eq!(snapshot[1].identity, SurveyIdentity::default());
}
