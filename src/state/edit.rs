use chrono::NaiveDate;
use serde_json::Value;

use crate::state::column::{self, Column, EditType};
use crate::state::data_model::{self, Fields, RowId};

/// Transient state of the one cell currently in edit mode.
#[derive(Clone, Debug, PartialEq)]
pub struct EditingCell {
    pub row_id: RowId,
    pub field: String,
    pub draft: String,
}

/// A committed edit, handed outward to the owning feature. The core performs
/// no persistence itself.
#[derive(Clone, Debug, PartialEq)]
pub struct CellUpdate {
    pub row_id: RowId,
    pub field: String,
    pub value: Value,
    pub row: Fields,
}

/// Single-cell editing state machine: Idle -> Editing -> Idle, one instance
/// per table. Starting a new edit replaces any prior one; commit and cancel
/// both return to Idle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CellEditor {
    editing: Option<EditingCell>,
}

impl CellEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn editing(&self) -> Option<&EditingCell> {
        self.editing.as_ref()
    }

    /// Enters edit mode on a cell. No-op (returns `false`) for fields without
    /// an editable column or rows without an id. The draft is seeded from the
    /// cell's current stringified value.
    pub fn begin(&mut self, columns: &[Column], row: &Fields, field: &str) -> bool {
        let Some(column) = columns.iter().find(|c| c.id == field) else {
            return false;
        };
        if !column.editable {
            return false;
        }
        let Some(row_id) = data_model::row_id(row) else {
            return false;
        };

        let draft = column::cell_display(columns, row, field);
        self.editing = Some(EditingCell {
            row_id,
            field: field.to_string(),
            draft,
        });
        true
    }

    pub fn set_draft(&mut self, text: String) {
        if let Some(cell) = &mut self.editing {
            cell.draft = text;
        }
    }

    pub fn draft(&self) -> Option<&str> {
        self.editing.as_ref().map(|cell| cell.draft.as_str())
    }

    pub fn is_editing(&self, row_id: &RowId, field: &str) -> bool {
        self.editing
            .as_ref()
            .map(|cell| &cell.row_id == row_id && cell.field == field)
            .unwrap_or(false)
    }

    /// Commit path shared by blur and Enter. Editing state is cleared
    /// unconditionally; an update is produced only when the draft differs
    /// from the row's current stringified value.
    pub fn commit(&mut self, columns: &[Column], row: &Fields) -> Option<CellUpdate> {
        let cell = self.editing.take()?;
        if data_model::row_id(row).as_ref() != Some(&cell.row_id) {
            return None;
        }

        let original = column::cell_display(columns, row, &cell.field);
        if cell.draft == original {
            return None;
        }

        let edit_type = columns
            .iter()
            .find(|c| c.id == cell.field)
            .map(|c| c.edit_type)
            .unwrap_or_default();

        Some(CellUpdate {
            value: convert_draft(edit_type, &cell.draft),
            row_id: cell.row_id,
            field: cell.field,
            row: row.clone(),
        })
    }

    /// Escape path: the draft is discarded and no update is produced.
    pub fn cancel(&mut self) {
        self.editing = None;
    }
}

/// Immediate commit for select cells, which have no draft phase: a change of
/// the dropdown produces an update unless the value is unchanged.
pub fn select_change(
    columns: &[Column],
    row: &Fields,
    field: &str,
    value: &str,
) -> Option<CellUpdate> {
    let row_id = data_model::row_id(row)?;
    if column::cell_display(columns, row, field) == value {
        return None;
    }
    Some(CellUpdate {
        row_id,
        field: field.to_string(),
        value: Value::String(value.to_string()),
        row: row.clone(),
    })
}

/// Converts a committed draft string into the value handed to the owner.
/// Unparseable number and date drafts are passed through as raw strings; the
/// core has no error channel and leaves validation to the owner.
pub fn convert_draft(edit_type: EditType, draft: &str) -> Value {
    match edit_type {
        EditType::Text | EditType::Select => Value::String(draft.to_string()),
        EditType::Number => {
            let trimmed = draft.trim();
            if trimmed.is_empty() {
                Value::Null
            } else {
                parse_number(trimmed)
                    .map(Value::Number)
                    .unwrap_or_else(|| Value::String(draft.to_string()))
            }
        }
        EditType::Date => {
            let trimmed = draft.trim();
            if trimmed.is_empty() {
                Value::Null
            } else if NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").is_ok() {
                Value::String(trimmed.to_string())
            } else {
                Value::String(draft.to_string())
            }
        }
    }
}

fn parse_number(raw: &str) -> Option<serde_json::Number> {
    if let Ok(i) = raw.parse::<i64>() {
        return Some(i.into());
    }
    if let Ok(u) = raw.parse::<u64>() {
        return Some(u.into());
    }
    let f = raw.parse::<f64>().ok()?;
    serde_json::Number::from_f64(f)
}
