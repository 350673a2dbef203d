//! Edit/storage conversion of visit identity fields.

use proptest::prelude::*;
use survey_store::{date_to_edit, date_to_storage, time_to_edit, time_to_storage, IdentityInput};

#[test]
fn empty_values_stay_empty() {
    assert_eq!(date_to_storage(""), "");
    assert_eq!(date_to_edit(""), "");
    assert_eq!(time_to_storage(""), "");
    assert_eq!(time_to_edit(""), "");
}

#[test]
fn known_conversions() {
    assert_eq!(date_to_storage("2026-05-14"), "14/05/2026");
    assert_eq!(date_to_edit("14/05/2026"), "2026-05-14");
    assert_eq!(time_to_storage("07:45"), "07.45");
    assert_eq!(time_to_edit("07.45"), "07:45");
}

#[test]
fn malformed_dates_pass_through() {
    assert_eq!(date_to_storage("14 Mei 2026"), "14 Mei 2026");
    assert_eq!(date_to_edit("2026"), "2026");
}

#[test]
fn identity_input_converts_once() {
    let (_, stored) = IdentityInput::Date("2026-05-14".into()).into_storage();
    assert_eq!(stored, "14/05/2026");
    let (_, stored) = IdentityInput::Surveyor("Ahmad".into()).into_storage();
    assert_eq!(stored, "Ahmad");
}

proptest! {
    #[test]
    fn date_round_trips(year in 1900u32..2100, month in 1u32..=12, day in 1u32..=28) {
        let edit = format!("{year:04}-{month:02}-{day:02}");
        let stored = date_to_storage(&edit);
        prop_assert_eq!(&stored, &format!("{day:02}/{month:02}/{year:04}"));
        prop_assert_eq!(date_to_edit(&stored), edit);
    }

    #[test]
    fn time_round_trips(hour in 0u32..24, minute in 0u32..60) {
        let edit = format!("{hour:02}:{minute:02}");
        let stored = time_to_storage(&edit);
        prop_assert_eq!(time_to_edit(&stored), edit);
    }
}
