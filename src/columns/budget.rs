use dioxus::prelude::*;
use serde_json::Value;

use crate::state::column::{Align, Column, EditType, SelectOption};
use crate::state::data_model::{self, Fields};
use crate::state::i18n::{self, Language};

pub const ADD_FIELD: &str = "item";

pub fn group_options(language: Language) -> Vec<SelectOption> {
    [
        ("venue", "budget.group.venue"),
        ("catering", "budget.group.catering"),
        ("music", "budget.group.music"),
        ("photography", "budget.group.photography"),
        ("flowers", "budget.group.flowers"),
        ("attire", "budget.group.attire"),
        ("other", "budget.group.other"),
    ]
    .into_iter()
    .map(|(value, key)| SelectOption::new(value, i18n::tr(language, key)))
    .collect()
}

const GROUP_COLORS: &[(&str, &str)] = &[
    ("venue", "#1976d2"),
    ("catering", "#ed6c02"),
    ("music", "#7b1fa2"),
    ("photography", "#0288d1"),
    ("flowers", "#2e7d32"),
    ("attire", "#c2185b"),
    ("other", "#757575"),
];

fn amount(row: &Fields, field: &str) -> f64 {
    row.get(field)
        .and_then(data_model::value_as_f64)
        .unwrap_or(0.0)
}

/// Outstanding amount per item: planned cost minus what was already paid.
pub fn balance(row: &Fields) -> f64 {
    amount(row, "planned") - amount(row, "paid")
}

pub fn columns(language: Language) -> Vec<Column> {
    vec![
        Column::new("item", i18n::tr(language, "column.budget_item"))
            .editable(EditType::Text)
            .sticky()
            .min_width(180),
        Column::new("group", i18n::tr(language, "column.budget_group"))
            .editable(EditType::Select)
            .options(group_options(language))
            .colors(GROUP_COLORS)
            .width(140),
        Column::new("planned", i18n::tr(language, "column.planned"))
            .editable(EditType::Number)
            .align(Align::Right)
            .width(110),
        Column::new("actual", i18n::tr(language, "column.actual"))
            .editable(EditType::Number)
            .align(Align::Right)
            .width(110),
        Column::new("paid", i18n::tr(language, "column.paid"))
            .editable(EditType::Number)
            .align(Align::Right)
            .width(110),
        Column::new("balance", i18n::tr(language, "column.balance"))
            .get_value(|row| {
                serde_json::Number::from_f64(balance(row))
                    .map(Value::Number)
                    .unwrap_or(Value::Null)
            })
            .render(|row| {
                let value = balance(row);
                let class = if value < 0.0 { "amount-negative" } else { "amount" };
                rsx! {
                    span { class: "{class}", "{value:.0}" }
                }
            })
            .align(Align::Right)
            .width(110),
    ]
}

pub fn search_fields() -> Vec<String> {
    ["item", "group"].into_iter().map(String::from).collect()
}

pub fn default_new_row() -> Fields {
    Fields::from([("group".to_string(), Value::String("other".to_string()))])
}
