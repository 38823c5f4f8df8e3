use serde_json::Value;

use crate::state::column::{Align, Column, EditType, SelectOption};
use crate::state::data_model::Fields;
use crate::state::i18n::{self, Language};

pub const ADD_FIELD: &str = "name";

pub fn status_options(language: Language) -> Vec<SelectOption> {
    [
        ("new", "lead.status.new"),
        ("contacted", "lead.status.contacted"),
        ("proposal", "lead.status.proposal"),
        ("booked", "lead.status.booked"),
        ("lost", "lead.status.lost"),
    ]
    .into_iter()
    .map(|(value, key)| SelectOption::new(value, i18n::tr(language, key)))
    .collect()
}

const STATUS_COLORS: &[(&str, &str)] = &[
    ("new", "#1976d2"),
    ("contacted", "#7b1fa2"),
    ("proposal", "#ed6c02"),
    ("booked", "#2e7d32"),
    ("lost", "#757575"),
];

pub fn columns(language: Language) -> Vec<Column> {
    vec![
        Column::new("name", i18n::tr(language, "column.lead_name"))
            .editable(EditType::Text)
            .sticky()
            .min_width(160),
        Column::new("status", i18n::tr(language, "column.lead_status"))
            .editable(EditType::Select)
            .options(status_options(language))
            .colors(STATUS_COLORS)
            .width(130),
        Column::new("event_date", i18n::tr(language, "column.event_date"))
            .editable(EditType::Date)
            .width(130),
        Column::new("guests", i18n::tr(language, "column.guests"))
            .editable(EditType::Number)
            .align(Align::Right)
            .width(80),
        Column::new("budget", i18n::tr(language, "column.lead_budget"))
            .editable(EditType::Number)
            .align(Align::Right)
            .width(110),
        Column::new("phone", i18n::tr(language, "column.phone"))
            .editable(EditType::Text)
            .unsortable()
            .width(130),
        Column::new("notes", i18n::tr(language, "column.notes"))
            .editable(EditType::Text)
            .unsortable()
            .min_width(200),
    ]
}

pub fn search_fields() -> Vec<String> {
    ["name", "phone", "notes"]
        .into_iter()
        .map(String::from)
        .collect()
}

pub fn default_new_row() -> Fields {
    Fields::from([("status".to_string(), Value::String("new".to_string()))])
}
