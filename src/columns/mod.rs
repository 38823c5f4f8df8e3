pub mod budget;
pub mod leads;
pub mod tasks;
pub mod templates;

use chrono::NaiveDate;

use crate::state::column::Column;
use crate::state::data_model::Fields;
use crate::state::i18n::Language;
use crate::state::plan::Feature;

/// Column schema for one feature table. Schemas are pure values; the caller
/// memoizes them on language and wedding date.
pub fn for_feature(
    feature: Feature,
    language: Language,
    wedding_date: Option<NaiveDate>,
) -> Vec<Column> {
    match feature {
        Feature::Leads => leads::columns(language),
        Feature::Budget => budget::columns(language),
        Feature::Tasks => tasks::columns(language),
        Feature::Templates => templates::columns(language, wedding_date),
    }
}

pub fn search_fields(feature: Feature) -> Vec<String> {
    match feature {
        Feature::Leads => leads::search_fields(),
        Feature::Budget => budget::search_fields(),
        Feature::Tasks => tasks::search_fields(),
        Feature::Templates => templates::search_fields(),
    }
}

/// The identifying field the inline add row fills in.
pub fn add_field(feature: Feature) -> &'static str {
    match feature {
        Feature::Leads => leads::ADD_FIELD,
        Feature::Budget => budget::ADD_FIELD,
        Feature::Tasks => tasks::ADD_FIELD,
        Feature::Templates => templates::ADD_FIELD,
    }
}

pub fn default_new_row(feature: Feature) -> Fields {
    match feature {
        Feature::Leads => leads::default_new_row(),
        Feature::Budget => budget::default_new_row(),
        Feature::Tasks => tasks::default_new_row(),
        Feature::Templates => templates::default_new_row(),
    }
}
