use proptest::prelude::*;
use survey_store::{
    Expedition, ExpeditionRecordDraft, SpiceMadinah, SpiceMakkah, SpiceRecordDraft, SurveyStore,
    Tenant, TenantRecordDraft, TimeScope,
};

fn amount() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => (0u32..100_000).prop_map(|n| n.to_string()),
        2 => (0.0f64..10_000.0).prop_map(|n| format!("{n:.2}")),
        1 => "[a-z ]{0,6}",
    ]
}

fn populated(amounts: &[String]) -> SurveyStore {
    let mut store = SurveyStore::new();
    for (i, amount) in amounts.iter().enumerate() {
        let name = format!("Bumbu {i}");
        store
            .records::<SpiceMakkah>()
            .add(SpiceRecordDraft::new(&name, amount, amount));
        store
            .records::<SpiceMadinah>()
            .add(SpiceRecordDraft::new(&name, amount, amount));
        store
            .records::<Expedition>()
            .add(ExpeditionRecordDraft::new("Kargo", amount, amount));
        store
            .records::<Tenant>()
            .add(TenantRecordDraft::new("Toko", "Kurma", "", amount));
    }
    store
}

proptest! {
    #[test]
    fn totals_never_shrink_as_the_window_widens(amounts in prop::collection::vec(amount(), 0..12)) {
        let view = populated(&amounts).view();
        let totals: Vec<[f64; 3]> = TimeScope::WIDENING
            .iter()
            .map(|scope| {
                let m = view.dashboard(*scope);
                [m.spice_volume, m.cargo_weight, m.tenant_revenue]
            })
            .collect();

        for pair in totals.windows(2) {
            for metric in 0..3 {
                prop_assert!(pair[0][metric] <= pair[1][metric]);
            }
        }
    }

    #[test]
    fn provider_independent_counts_ignore_scope(amounts in prop::collection::vec(amount(), 0..8)) {
        let view = populated(&amounts).view();
        let all = view.visualization(TimeScope::All);
        for scope in TimeScope::WIDENING {
            let scoped = view.visualization(scope);
            prop_assert_eq!(scoped.expedition_trend.len(), all.expedition_trend.len());
            prop_assert_eq!(scoped.average_expedition_income, all.average_expedition_income);
        }
    }
}
