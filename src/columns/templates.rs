use chrono::NaiveDate;
use dioxus::prelude::*;
use serde_json::Value;

use crate::state::column::{Align, Column, EditType};
use crate::state::data_model::{self, Fields};
use crate::state::i18n::{self, Language};
use crate::state::schedule;

pub const ADD_FIELD: &str = "title";

fn offset_days(row: &Fields) -> Option<i64> {
    row.get("offset_days")
        .and_then(data_model::value_as_f64)
        .map(|days| days as i64)
}

/// Template columns. The due column is computed from the plan's wedding date;
/// without one it shows only the relative offset.
pub fn columns(language: Language, wedding_date: Option<NaiveDate>) -> Vec<Column> {
    vec![
        Column::new("title", i18n::tr(language, "column.template_title"))
            .editable(EditType::Text)
            .sticky()
            .min_width(220),
        Column::new("offset_days", i18n::tr(language, "column.offset_days"))
            .editable(EditType::Number)
            .align(Align::Right)
            .width(110),
        Column::new("due", i18n::tr(language, "column.template_due"))
            .get_value(move |row| match (wedding_date, offset_days(row)) {
                (Some(wedding), Some(offset)) => Value::String(schedule::format_date(
                    schedule::resolve_due_date(wedding, offset),
                )),
                _ => Value::Null,
            })
            .render(move |row| {
                let Some(offset) = offset_days(row) else {
                    return rsx! {
                        span { class: "due-preview", "" }
                    };
                };
                let relative = schedule::format_offset(language, offset);
                let resolved = wedding_date
                    .map(|wedding| {
                        schedule::format_date(schedule::resolve_due_date(wedding, offset))
                    })
                    .map(|date| format!(" ({date})"))
                    .unwrap_or_default();
                rsx! {
                    span { class: "due-preview", "{relative}{resolved}" }
                }
            })
            .min_width(220),
        Column::new("notes", i18n::tr(language, "column.notes"))
            .editable(EditType::Text)
            .unsortable()
            .min_width(200),
    ]
}

pub fn search_fields() -> Vec<String> {
    ["title", "notes"].into_iter().map(String::from).collect()
}

pub fn default_new_row() -> Fields {
    Fields::from([("offset_days".to_string(), Value::Number((-30).into()))])
}
