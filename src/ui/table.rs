use dioxus::prelude::{Key, *};

use crate::state::column::{self, Column, EditType};
use crate::state::data_model::{self, Fields, RowId};
use crate::state::edit::{self, CellEditor, CellUpdate};
use crate::state::view::{self, SortOrder, TableView};

const SELECT_COLUMN_WIDTH: u32 = 36;
const STICKY_FALLBACK_WIDTH: u32 = 140;

/// Generic inline-editable table. Rows and selection are owned by the caller;
/// every change is reported outward through the three event handlers and
/// nothing is persisted here.
#[component]
pub fn InlineTable(
    columns: Vec<Column>,
    rows: Vec<Fields>,
    view: Signal<TableView>,
    #[props(default)] selectable: bool,
    #[props(default)] selected: Vec<RowId>,
    #[props(default)] enable_inline_add: bool,
    #[props(default)] add_row_field: String,
    #[props(default)] default_new_row: Fields,
    #[props(default)] empty_message: String,
    #[props(default)] add_placeholder: String,
    on_cell_update: EventHandler<CellUpdate>,
    #[props(default)] on_add_row: EventHandler<Fields>,
    #[props(default)] on_selection_change: EventHandler<Vec<RowId>>,
) -> Element {
    let editor = use_signal(CellEditor::new);
    let snapshot = view.read().clone();
    let visible = snapshot.visible_rows(&columns, &rows);
    let offsets = sticky_offsets(&columns, if selectable { SELECT_COLUMN_WIDTH } else { 0 });
    let col_count = columns.len() + usize::from(selectable);
    let everything_selected = view::all_selected(&selected, &rows);

    rsx! {
        div { class: "table-container",
            table {
                thead {
                    tr {
                        if selectable {
                            th { class: "select-cell", style: "position: sticky; left: 0; z-index: 2;",
                                input {
                                    r#type: "checkbox",
                                    checked: everything_selected,
                                    onchange: {
                                        let rows = rows.clone();
                                        let selected = selected.clone();
                                        move |_| on_selection_change.call(view::select_all(&selected, &rows))
                                    }
                                }
                            }
                        }
                        for (idx, col) in columns.iter().enumerate() {
                            th {
                                class: header_class(col, &snapshot),
                                style: cell_style(col, offsets[idx]),
                                onclick: {
                                    let sortable = col.sortable;
                                    let col_id = col.id.clone();
                                    let mut view = view;
                                    move |_| {
                                        if sortable {
                                            view.with_mut(|v| v.toggle_sort(&col_id));
                                        }
                                    }
                                },
                                "{col.label}"
                            }
                        }
                    }
                }
                tbody {
                    if visible.is_empty() && !enable_inline_add {
                        tr {
                            td { class: "empty-state", colspan: "{col_count}", "{empty_message}" }
                        }
                    }
                    for (display_index, data_index) in visible.iter().enumerate() {
                        if let Some(row) = rows.get(*data_index) {
                            TableRow {
                                key: "{row_key(row, *data_index)}",
                                display_index,
                                columns: columns.clone(),
                                row: row.clone(),
                                offsets: offsets.clone(),
                                selectable,
                                is_selected: view::is_row_selected(&selected, row),
                                editor,
                                on_cell_update,
                                on_toggle: {
                                    let selected = selected.clone();
                                    let row = row.clone();
                                    move |_| on_selection_change.call(view::toggle_row(&selected, &row))
                                },
                            }
                        }
                    }
                    if enable_inline_add {
                        AddRow {
                            columns: columns.clone(),
                            col_count,
                            add_row_field: add_row_field.clone(),
                            default_new_row: default_new_row.clone(),
                            placeholder: add_placeholder.clone(),
                            on_add_row,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TableRow(
    display_index: usize,
    columns: Vec<Column>,
    row: Fields,
    offsets: Vec<Option<u32>>,
    selectable: bool,
    is_selected: bool,
    editor: Signal<CellEditor>,
    on_cell_update: EventHandler<CellUpdate>,
    on_toggle: EventHandler<()>,
) -> Element {
    let mut row_class = if display_index % 2 == 0 {
        "even"
    } else {
        "odd"
    }
    .to_string();
    if is_selected {
        row_class.push_str(" selected-row");
    }

    rsx! {
        tr { class: "{row_class}",
            if selectable {
                td { class: "select-cell", style: "position: sticky; left: 0;",
                    input {
                        r#type: "checkbox",
                        checked: is_selected,
                        onchange: move |_| on_toggle.call(())
                    }
                }
            }
            for (idx, col) in columns.iter().enumerate() {
                Cell {
                    key: "{col.id}",
                    columns: columns.clone(),
                    column: col.clone(),
                    row: row.clone(),
                    sticky_left: offsets.get(idx).copied().flatten(),
                    editor,
                    on_cell_update,
                }
            }
        }
    }
}

/// One cell. Dispatch order: display-only columns render their override,
/// select columns are always a live dropdown, everything else toggles between
/// click-to-edit display and a focused input.
#[component]
fn Cell(
    columns: Vec<Column>,
    column: Column,
    row: Fields,
    sticky_left: Option<u32>,
    editor: Signal<CellEditor>,
    on_cell_update: EventHandler<CellUpdate>,
) -> Element {
    let display = column::cell_display(&columns, &row, &column.id);
    let style = cell_style(&column, sticky_left);

    if !column.editable {
        return rsx! {
            td { class: "cell", style: "{style}",
                if let Some(render) = &column.render {
                    {render(&row)}
                } else {
                    "{display}"
                }
            }
        };
    }

    if column.edit_type == EditType::Select {
        let color = column.color_for(&display).unwrap_or("inherit").to_string();
        return rsx! {
            td { class: "cell", style: "{style}",
                select {
                    class: "cell-select",
                    style: "color: {color};",
                    value: "{display}",
                    onchange: {
                        let columns = columns.clone();
                        let row = row.clone();
                        let field = column.id.clone();
                        move |evt: Event<FormData>| {
                            if let Some(update) = edit::select_change(&columns, &row, &field, &evt.value()) {
                                on_cell_update.call(update);
                            }
                        }
                    },
                    for opt in &column.edit_options {
                        option { value: "{opt.value}", selected: opt.value == display, "{opt.label}" }
                    }
                }
            }
        };
    }

    let editing_now = data_model::row_id(&row)
        .map(|id| editor.read().is_editing(&id, &column.id))
        .unwrap_or(false);

    if editing_now {
        let draft = editor
            .read()
            .draft()
            .map(str::to_string)
            .unwrap_or_default();
        let input_type = match column.edit_type {
            EditType::Number => "number",
            EditType::Date => "date",
            _ => "text",
        };
        rsx! {
            td { class: "editing-cell", style: "{style}",
                input {
                    class: "cell-input",
                    r#type: input_type,
                    value: "{draft}",
                    autofocus: true,
                    oninput: {
                        let mut editor = editor;
                        move |evt: Event<FormData>| {
                            editor.with_mut(|e| e.set_draft(evt.value()));
                        }
                    },
                    onblur: {
                        let columns = columns.clone();
                        let row = row.clone();
                        let mut editor = editor;
                        move |_| {
                            if let Some(update) = editor.with_mut(|e| e.commit(&columns, &row)) {
                                on_cell_update.call(update);
                            }
                        }
                    },
                    onkeydown: {
                        let columns = columns.clone();
                        let row = row.clone();
                        let mut editor = editor;
                        move |evt: Event<KeyboardData>| match evt.key() {
                            Key::Enter => {
                                if let Some(update) = editor.with_mut(|e| e.commit(&columns, &row)) {
                                    on_cell_update.call(update);
                                }
                            }
                            Key::Escape => {
                                editor.with_mut(|e| e.cancel());
                            }
                            _ => {}
                        }
                    }
                }
            }
        }
    } else {
        rsx! {
            td { class: "cell editable", style: "{style}",
                onclick: {
                    let columns = columns.clone();
                    let row = row.clone();
                    let field = column.id.clone();
                    let mut editor = editor;
                    move |_| {
                        editor.with_mut(|e| e.begin(&columns, &row, &field));
                    }
                },
                "{display}"
            }
        }
    }
}

/// Pinned bottom row: one free-text input for the feature's identifying
/// field. Enter or the add button composes a full row and clears the input.
#[component]
fn AddRow(
    columns: Vec<Column>,
    col_count: usize,
    add_row_field: String,
    default_new_row: Fields,
    placeholder: String,
    on_add_row: EventHandler<Fields>,
) -> Element {
    let draft = use_signal(String::new);

    rsx! {
        tr { class: "add-row",
            td { colspan: "{col_count}",
                input {
                    class: "add-row-input",
                    placeholder: "{placeholder}",
                    value: "{draft.read()}",
                    oninput: {
                        let mut draft = draft;
                        move |evt: Event<FormData>| draft.set(evt.value())
                    },
                    onkeydown: {
                        let columns = columns.clone();
                        let default_new_row = default_new_row.clone();
                        let add_row_field = add_row_field.clone();
                        move |evt: Event<KeyboardData>| {
                            if evt.key() == Key::Enter {
                                submit_add_row(&columns, &default_new_row, &add_row_field, draft, on_add_row);
                            }
                        }
                    }
                }
                button {
                    class: "add-row-btn",
                    onclick: {
                        let columns = columns.clone();
                        let default_new_row = default_new_row.clone();
                        let add_row_field = add_row_field.clone();
                        move |_| {
                            submit_add_row(&columns, &default_new_row, &add_row_field, draft, on_add_row);
                        }
                    },
                    "\u{2795}"
                }
            }
        }
    }
}

fn submit_add_row(
    columns: &[Column],
    default_new_row: &Fields,
    add_field: &str,
    mut draft: Signal<String>,
    on_add_row: EventHandler<Fields>,
) {
    let text = draft.read().clone();
    let Some(new_row) = column::compose_new_row(columns, default_new_row, add_field, &text) else {
        return;
    };
    on_add_row.call(new_row);
    draft.set(String::new());
}

fn row_key(row: &Fields, data_index: usize) -> String {
    data_model::row_id(row)
        .map(|id| id.to_string())
        .unwrap_or_else(|| data_index.to_string())
}

fn header_class(col: &Column, view: &TableView) -> String {
    let sortable_class = if col.sortable { "sortable" } else { "" };
    let sort_class = match view.order_by() {
        Some(order_by) if order_by == col.id => match view.order() {
            SortOrder::Asc => "sorted-asc",
            SortOrder::Desc => "sorted-desc",
        },
        _ => "",
    };
    join_classes(sortable_class, sort_class)
}

fn join_classes(a: &str, b: &str) -> String {
    if a.is_empty() {
        return b.to_string();
    }
    if b.is_empty() {
        return a.to_string();
    }
    format!("{a} {b}")
}

/// Inline style for a header or body cell: layout hints plus the sticky left
/// offset when the column is pinned.
fn cell_style(column: &Column, sticky_left: Option<u32>) -> String {
    let mut out = String::new();
    if let Some(width) = column.width {
        out.push_str(&format!("width: {width}px;"));
    }
    if let Some(min_width) = column.min_width {
        out.push_str(&format!("min-width: {min_width}px;"));
    }
    out.push_str(&format!("text-align: {};", column.align.css()));
    if let Some(left) = sticky_left {
        out.push_str(&format!("position: sticky; left: {left}px; z-index: 1;"));
    }
    out
}

/// Cumulative left offsets for sticky columns, applied left-to-right.
/// `lead_width` accounts for the selection column when it is shown.
fn sticky_offsets(columns: &[Column], lead_width: u32) -> Vec<Option<u32>> {
    let mut offset = lead_width;
    columns
        .iter()
        .map(|col| {
            if col.sticky {
                let left = offset;
                offset += col.width.or(col.min_width).unwrap_or(STICKY_FALLBACK_WIDTH);
                Some(left)
            } else {
                None
            }
        })
        .collect()
}
