use std::cmp::Ordering;

use serde_json::{Number, Value};

use crate::state::column::{self, Column};
use crate::state::data_model::{self, Fields, RowId};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// View-derived state of one table instance: free-text search over the named
/// fields plus a single sort column. Never persisted, never mutates row data;
/// `visible_rows` recomputes the projection from scratch on every call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableView {
    order_by: Option<String>,
    order: SortOrder,
    search_query: String,
    search_fields: Vec<String>,
}

impl TableView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_fields(fields: Vec<String>) -> Self {
        Self {
            search_fields: fields,
            ..Self::default()
        }
    }

    pub fn order_by(&self) -> Option<&str> {
        self.order_by.as_deref()
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search(&mut self, query: String) {
        self.search_query = query.trim().to_string();
    }

    pub fn clear_search(&mut self) {
        self.search_query.clear();
    }

    /// Ascending on a new column; toggles direction on the current one.
    pub fn toggle_sort(&mut self, column: &str) {
        match self.order_by.as_deref() {
            Some(current) if current == column => {
                self.order = match self.order {
                    SortOrder::Asc => SortOrder::Desc,
                    SortOrder::Desc => SortOrder::Asc,
                };
            }
            _ => {
                self.order_by = Some(column.to_string());
                self.order = SortOrder::Asc;
            }
        }
    }

    pub fn clear_sort(&mut self) {
        self.order_by = None;
        self.order = SortOrder::Asc;
    }

    /// Indices of the rows to display, filtered then sorted. With no search
    /// query or no sort column the original row order passes through.
    pub fn visible_rows(&self, columns: &[Column], rows: &[Fields]) -> Vec<usize> {
        let mut visible: Vec<usize> = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| self.row_matches_search(columns, row))
            .map(|(idx, _)| idx)
            .collect();

        if let Some(order_by) = &self.order_by {
            visible.sort_by(|&a, &b| {
                let left = column::column_value(columns, &rows[a], order_by);
                let right = column::column_value(columns, &rows[b], order_by);
                compare_for_order(left.as_ref(), right.as_ref(), self.order)
            });
        }
        visible
    }

    fn row_matches_search(&self, columns: &[Column], row: &Fields) -> bool {
        if self.search_query.is_empty() || self.search_fields.is_empty() {
            return true;
        }

        let needle = self.search_query.to_lowercase();
        self.search_fields.iter().any(|field| {
            column::column_value(columns, row, field)
                .as_ref()
                .map(data_model::display_value)
                .map(|text| text.to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
    }
}

/// Missing and `null` cells sort after everything else regardless of
/// direction; the direction flips only the comparison of present values.
fn compare_for_order(a: Option<&Value>, b: Option<&Value>, order: SortOrder) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(left), Some(right)) => {
            let ordering = compare_value_pair(left, right);
            match order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        }
    }
}

fn compare_value_pair(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => compare_numbers(a, b),
        (Value::String(a), Value::String(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
        _ => type_rank(left)
            .cmp(&type_rank(right))
            .then_with(|| data_model::display_value(left).cmp(&data_model::display_value(right))),
    }
}

fn compare_numbers(left: &Number, right: &Number) -> Ordering {
    match (left.as_i64(), left.as_u64(), right.as_i64(), right.as_u64()) {
        (Some(a), _, Some(b), _) => a.cmp(&b),
        (Some(a), _, _, Some(b)) => {
            if a < 0 {
                Ordering::Less
            } else {
                (a as u64).cmp(&b)
            }
        }
        (_, Some(a), Some(b), _) => {
            if b < 0 {
                Ordering::Greater
            } else {
                a.cmp(&(b as u64))
            }
        }
        (_, Some(a), _, Some(b)) => a.cmp(&b),
        _ => {
            let left = left.as_f64().unwrap_or(f64::NAN);
            let right = right.as_f64().unwrap_or(f64::NAN);
            left.partial_cmp(&right).unwrap_or(Ordering::Equal)
        }
    }
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

/// Selection is controlled: the table renders whatever `selected` holds and
/// reports changes outward. These helpers stay pure over `id` equality.
pub fn is_row_selected(selected: &[RowId], row: &Fields) -> bool {
    data_model::row_id(row)
        .map(|id| selected.contains(&id))
        .unwrap_or(false)
}

pub fn toggle_row(selected: &[RowId], row: &Fields) -> Vec<RowId> {
    let Some(id) = data_model::row_id(row) else {
        return selected.to_vec();
    };
    let mut next: Vec<RowId> = selected.to_vec();
    if let Some(pos) = next.iter().position(|existing| existing == &id) {
        next.remove(pos);
    } else {
        next.push(id);
    }
    next
}

pub fn all_selected(selected: &[RowId], rows: &[Fields]) -> bool {
    !rows.is_empty()
        && rows
            .iter()
            .filter_map(data_model::row_id)
            .all(|id| selected.contains(&id))
}

/// Header checkbox behavior: everything selected clears, anything else
/// selects all rows.
pub fn select_all(selected: &[RowId], rows: &[Fields]) -> Vec<RowId> {
    if all_selected(selected, rows) {
        Vec::new()
    } else {
        rows.iter().filter_map(data_model::row_id).collect()
    }
}
