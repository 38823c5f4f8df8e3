use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use dioxus::prelude::Element;
use serde_json::Value;

use crate::state::data_model::{self, Fields};

/// Which editor a cell renders when its column is editable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditType {
    #[default]
    Text,
    Number,
    Select,
    Date,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    pub fn css(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

/// One enumerated choice of a select column. `value` is the stored string,
/// `label` the translated display text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

pub type ValueFn = Arc<dyn Fn(&Fields) -> Value>;
pub type RenderFn = Arc<dyn Fn(&Fields) -> Element>;

/// Declarative description of one table column: identity, edit behavior,
/// rendering overrides, and layout hints.
#[derive(Clone, Default)]
pub struct Column {
    pub id: String,
    pub label: String,
    pub editable: bool,
    pub edit_type: EditType,
    pub edit_options: Vec<SelectOption>,
    pub edit_colors: BTreeMap<String, String>,
    pub get_value: Option<ValueFn>,
    pub render: Option<RenderFn>,
    pub sortable: bool,
    pub width: Option<u32>,
    pub min_width: Option<u32>,
    pub align: Align,
    pub sticky: bool,
}

impl Column {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            sortable: true,
            ..Self::default()
        }
    }

    pub fn editable(mut self, edit_type: EditType) -> Self {
        self.editable = true;
        self.edit_type = edit_type;
        self
    }

    pub fn options(mut self, options: Vec<SelectOption>) -> Self {
        self.edit_options = options;
        self
    }

    pub fn colors(mut self, pairs: &[(&str, &str)]) -> Self {
        self.edit_colors = pairs
            .iter()
            .map(|(value, color)| (value.to_string(), color.to_string()))
            .collect();
        self
    }

    pub fn get_value(mut self, f: impl Fn(&Fields) -> Value + 'static) -> Self {
        self.get_value = Some(Arc::new(f));
        self
    }

    pub fn render(mut self, f: impl Fn(&Fields) -> Element + 'static) -> Self {
        self.render = Some(Arc::new(f));
        self
    }

    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn width(mut self, px: u32) -> Self {
        self.width = Some(px);
        self
    }

    pub fn min_width(mut self, px: u32) -> Self {
        self.min_width = Some(px);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn sticky(mut self) -> Self {
        self.sticky = true;
        self
    }

    pub fn color_for(&self, value: &str) -> Option<&str> {
        self.edit_colors.get(value).map(String::as_str)
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("editable", &self.editable)
            .field("edit_type", &self.edit_type)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Column {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.label == other.label
            && self.editable == other.editable
            && self.edit_type == other.edit_type
            && self.edit_options == other.edit_options
            && self.edit_colors == other.edit_colors
            && closure_eq(&self.get_value, &other.get_value)
            && closure_eq(&self.render, &other.render)
            && self.sortable == other.sortable
            && self.width == other.width
            && self.min_width == other.min_width
            && self.align == other.align
            && self.sticky == other.sticky
    }
}

fn closure_eq<T: ?Sized>(a: &Option<Arc<T>>, b: &Option<Arc<T>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        _ => false,
    }
}

/// Resolves a field through a matching column's `get_value` override, falling
/// back to a raw row lookup.
pub fn column_value(columns: &[Column], row: &Fields, field: &str) -> Option<Value> {
    if let Some(column) = columns.iter().find(|c| c.id == field) {
        if let Some(get) = &column.get_value {
            return Some(get(row));
        }
    }
    row.get(field).cloned()
}

/// Stringified cell content, as shown in display mode and seeded into drafts.
pub fn cell_display(columns: &[Column], row: &Fields, field: &str) -> String {
    column_value(columns, row, field)
        .as_ref()
        .map(data_model::display_value)
        .unwrap_or_default()
}

/// Blank value for a freshly added row's cell, by edit type.
pub fn default_value_for(column: &Column) -> Value {
    match column.edit_type {
        EditType::Text | EditType::Date => Value::String(String::new()),
        EditType::Number => Value::Number(0.into()),
        EditType::Select => Value::String(
            column
                .edit_options
                .first()
                .map(|opt| opt.value.clone())
                .unwrap_or_default(),
        ),
    }
}

/// Builds a complete new row for the inline add affordance. Precedence, last
/// writer wins: per-type defaults, then `default_new_row`, then the typed text
/// in `add_field`. Returns `None` when the trimmed text is empty.
pub fn compose_new_row(
    columns: &[Column],
    default_new_row: &Fields,
    add_field: &str,
    text: &str,
) -> Option<Fields> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let mut row = Fields::new();
    for column in columns.iter().filter(|c| c.editable) {
        row.insert(column.id.clone(), default_value_for(column));
    }
    for (field, value) in default_new_row {
        row.insert(field.clone(), value.clone());
    }
    row.insert(add_field.to_string(), Value::String(text.to_string()));
    Some(row)
}
