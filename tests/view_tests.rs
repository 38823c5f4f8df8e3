use std::collections::BTreeMap;

use serde_json::Value;

use plansheet::state::column::{Column, EditType};
use plansheet::state::data_model::{Fields, RowId};
use plansheet::state::view::{self, SortOrder, TableView};

fn sample_columns() -> Vec<Column> {
    vec![
        Column::new("title", "Title").editable(EditType::Text),
        Column::new("guests", "Guests").editable(EditType::Number),
        Column::new("assignee", "Assignee").editable(EditType::Text),
    ]
}

fn row(id: i64, title: &str, guests: Option<i64>, assignee: &str) -> Fields {
    let mut fields = BTreeMap::from([
        ("id".to_string(), Value::Number(id.into())),
        ("title".to_string(), Value::String(title.to_string())),
        ("assignee".to_string(), Value::String(assignee.to_string())),
    ]);
    if let Some(guests) = guests {
        fields.insert("guests".to_string(), Value::Number(guests.into()));
    }
    fields
}

fn sample_rows() -> Vec<Fields> {
    vec![
        row(1, "Book venue", Some(120), "Dana"),
        row(2, "Send invitations", None, "Noa"),
        row(3, "Order flowers", Some(40), "Dana"),
        row(4, "Confirm menu", Some(80), "Omer"),
    ]
}

fn search_view() -> TableView {
    TableView::with_search_fields(vec!["title".to_string(), "assignee".to_string()])
}

#[test]
fn test_no_query_returns_all_rows_in_order() {
    let view = search_view();
    let visible = view.visible_rows(&sample_columns(), &sample_rows());
    assert_eq!(visible, vec![0, 1, 2, 3]);
}

#[test]
fn test_search_filters_named_fields_case_insensitive() {
    let mut view = search_view();
    view.set_search("DANA".to_string());

    let visible = view.visible_rows(&sample_columns(), &sample_rows());
    assert_eq!(visible, vec![0, 2]);
}

#[test]
fn test_search_ignores_unlisted_fields() {
    let mut view = TableView::with_search_fields(vec!["title".to_string()]);
    view.set_search("dana".to_string());

    let visible = view.visible_rows(&sample_columns(), &sample_rows());
    assert!(visible.is_empty());
}

#[test]
fn test_search_without_fields_passes_everything() {
    let mut view = TableView::new();
    view.set_search("dana".to_string());

    let visible = view.visible_rows(&sample_columns(), &sample_rows());
    assert_eq!(visible, vec![0, 1, 2, 3]);
}

#[test]
fn test_clear_search_restores_original_order() {
    let mut view = search_view();
    view.set_search("dana".to_string());
    assert_eq!(view.visible_rows(&sample_columns(), &sample_rows()), vec![0, 2]);

    view.clear_search();
    assert_eq!(
        view.visible_rows(&sample_columns(), &sample_rows()),
        vec![0, 1, 2, 3]
    );
}

#[test]
fn test_toggle_sort_cycles_direction() {
    let mut view = TableView::new();

    view.toggle_sort("guests");
    assert_eq!(view.order_by(), Some("guests"));
    assert_eq!(view.order(), SortOrder::Asc);

    view.toggle_sort("guests");
    assert_eq!(view.order(), SortOrder::Desc);

    view.toggle_sort("title");
    assert_eq!(view.order_by(), Some("title"));
    assert_eq!(view.order(), SortOrder::Asc);

    view.clear_sort();
    assert_eq!(view.order_by(), None);
}

#[test]
fn test_sort_ascending_by_number() {
    let mut view = TableView::new();
    view.toggle_sort("guests");

    let visible = view.visible_rows(&sample_columns(), &sample_rows());
    // 40, 80, 120, then the row with no guests value
    assert_eq!(visible, vec![2, 3, 0, 1]);
}

#[test]
fn test_sort_missing_values_last_in_both_directions() {
    let mut view = TableView::new();
    view.toggle_sort("guests");
    let ascending = view.visible_rows(&sample_columns(), &sample_rows());
    assert_eq!(*ascending.last().unwrap(), 1);

    view.toggle_sort("guests");
    let descending = view.visible_rows(&sample_columns(), &sample_rows());
    assert_eq!(descending, vec![0, 3, 2, 1]);
}

#[test]
fn test_sort_is_idempotent() {
    let mut view = TableView::new();
    view.toggle_sort("title");

    let first = view.visible_rows(&sample_columns(), &sample_rows());
    let second = view.visible_rows(&sample_columns(), &sample_rows());
    assert_eq!(first, second);
}

#[test]
fn test_sort_uses_get_value_override() {
    let columns = vec![
        Column::new("title", "Title").editable(EditType::Text),
        Column::new("title_len", "Length").get_value(|row| {
            let len = row
                .get("title")
                .and_then(Value::as_str)
                .map(str::len)
                .unwrap_or(0);
            Value::Number((len as i64).into())
        }),
    ];
    let mut view = TableView::new();
    view.toggle_sort("title_len");

    let visible = view.visible_rows(&columns, &sample_rows());
    assert_eq!(visible, vec![0, 3, 2, 1]);
}

#[test]
fn test_null_cells_sort_after_values() {
    let mut rows = sample_rows();
    rows[0].insert("guests".to_string(), Value::Null);

    let mut view = TableView::new();
    view.toggle_sort("guests");

    let visible = view.visible_rows(&sample_columns(), &rows);
    // Explicit null and missing both trail the present values.
    assert_eq!(&visible[..2], &[2, 3]);
    assert_eq!(visible.len(), 4);
}

#[test]
fn test_toggle_row_adds_and_removes() {
    let rows = sample_rows();
    let selected: Vec<RowId> = Vec::new();

    let selected = view::toggle_row(&selected, &rows[0]);
    assert_eq!(selected, vec![RowId::Int(1)]);
    assert!(view::is_row_selected(&selected, &rows[0]));

    let selected = view::toggle_row(&selected, &rows[0]);
    assert!(selected.is_empty());
}

#[test]
fn test_select_all_then_clear() {
    let rows = sample_rows();
    let selected = view::select_all(&[], &rows);
    assert_eq!(selected.len(), 4);
    assert!(view::all_selected(&selected, &rows));

    let cleared = view::select_all(&selected, &rows);
    assert!(cleared.is_empty());
}

#[test]
fn test_select_all_on_empty_rows_is_empty() {
    assert!(view::select_all(&[], &[]).is_empty());
    assert!(!view::all_selected(&[], &[]));
}
