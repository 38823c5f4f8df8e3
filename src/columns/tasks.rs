use serde_json::Value;

use crate::state::column::{Column, EditType, SelectOption};
use crate::state::data_model::Fields;
use crate::state::i18n::{self, Language};

pub const ADD_FIELD: &str = "title";

pub fn status_options(language: Language) -> Vec<SelectOption> {
    [
        ("open", "task.status.open"),
        ("in_progress", "task.status.in_progress"),
        ("done", "task.status.done"),
    ]
    .into_iter()
    .map(|(value, key)| SelectOption::new(value, i18n::tr(language, key)))
    .collect()
}

pub fn priority_options(language: Language) -> Vec<SelectOption> {
    [
        ("high", "task.priority.high"),
        ("medium", "task.priority.medium"),
        ("low", "task.priority.low"),
    ]
    .into_iter()
    .map(|(value, key)| SelectOption::new(value, i18n::tr(language, key)))
    .collect()
}

const STATUS_COLORS: &[(&str, &str)] = &[
    ("open", "#1976d2"),
    ("in_progress", "#ed6c02"),
    ("done", "#2e7d32"),
];

const PRIORITY_COLORS: &[(&str, &str)] = &[
    ("high", "#d32f2f"),
    ("medium", "#ed6c02"),
    ("low", "#757575"),
];

pub fn columns(language: Language) -> Vec<Column> {
    vec![
        Column::new("title", i18n::tr(language, "column.task_title"))
            .editable(EditType::Text)
            .sticky()
            .min_width(200),
        Column::new("status", i18n::tr(language, "column.task_status"))
            .editable(EditType::Select)
            .options(status_options(language))
            .colors(STATUS_COLORS)
            .width(130),
        Column::new("priority", i18n::tr(language, "column.priority"))
            .editable(EditType::Select)
            .options(priority_options(language))
            .colors(PRIORITY_COLORS)
            .width(110),
        Column::new("due_date", i18n::tr(language, "column.due_date"))
            .editable(EditType::Date)
            .width(130),
        Column::new("assignee", i18n::tr(language, "column.assignee"))
            .editable(EditType::Text)
            .width(140),
    ]
}

pub fn search_fields() -> Vec<String> {
    ["title", "assignee"].into_iter().map(String::from).collect()
}

pub fn default_new_row() -> Fields {
    Fields::from([
        ("status".to_string(), Value::String("open".to_string())),
        ("priority".to_string(), Value::String("medium".to_string())),
    ])
}
