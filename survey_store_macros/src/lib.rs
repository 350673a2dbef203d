mod survey_record;

use proc_macro::TokenStream;

/// Derive macro implementing `survey_store::SurveyRecord` for a survey line-item struct.
///
/// Generates two companion types next to the struct:
/// - `<Name>Field`: one variant per line-item field, used for single-field updates.
/// - `<Name>Draft`: the line-item fields without id or identity, used as the `add` payload.
///
/// # Usage
///
/// ```ignore
/// #[derive(Clone, Debug, Serialize, Deserialize, SurveyRecord)]
/// #[survey(collection = "expeditions")]
/// pub struct ExpeditionRecord {
///     pub id: u32,
///     pub company_name: String,
///     pub price_per_kg: String,
///     pub weight: String,
///     #[serde(flatten)]
///     #[survey(identity)]
///     pub identity: SurveyIdentity,
/// }
///
/// let draft = ExpeditionRecordDraft { company_name: "Zamzam Cargo".into(), ..Default::default() };
/// store.records::<Expedition>().update_by_id(1, ExpeditionRecordField::Weight("120".into()));
/// ```
///
/// Field roles:
/// - `#[survey(id)]` or a field named `id` (must be `u32`)
/// - `#[survey(identity)]` or a field named `identity` (must be `SurveyIdentity`)
/// - every other field is a line-item field
///
/// The collection name defaults to the snake_case struct name without a `Record`
/// suffix, pluralised with `s`.
#[proc_macro_derive(SurveyRecord, attributes(survey))]
pub fn derive_survey_record(input: TokenStream) -> TokenStream {
    survey_record::derive_survey_record(input)
}
