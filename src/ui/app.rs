use std::path::PathBuf;

use dioxus::prelude::*;
use log::{debug, warn};

use crate::columns;
use crate::io::plan_io;
use crate::state::data_model::{Fields, RowId};
use crate::state::edit::CellUpdate;
use crate::state::i18n::{self, Language};
use crate::state::plan::{Feature, PlanState};
use crate::state::view::TableView;
use crate::ui::table::InlineTable;
use crate::ui::toolbar::Toolbar;

const STYLES: Asset = asset!("/assets/styles.css");

#[component]
pub fn App() -> Element {
    let plan = use_signal(PlanState::new);
    let language = use_signal(Language::default);
    let feature = use_signal(Feature::default);
    let view = use_signal(|| TableView::with_search_fields(columns::search_fields(Feature::default())));
    let selected = use_signal(Vec::<RowId>::new);
    let file_path = use_signal::<Option<PathBuf>>(|| None);
    let error_message = use_signal::<Option<String>>(|| None);
    let save_success = use_signal(|| false);

    use_effect({
        let mut plan = plan;
        let mut file_path = file_path;
        let mut error_message = error_message;
        move || {
            if let Ok(path) = std::env::var("PLANSHEET_OPEN") {
                let path = PathBuf::from(path);
                match plan_io::load_plan(&path) {
                    Ok(loaded) => {
                        plan.with_mut(|state| state.replace(loaded));
                        file_path.set(Some(path));
                        error_message.set(None);
                    }
                    Err(e) => {
                        warn!("failed to open plan from PLANSHEET_OPEN: {e}");
                        error_message.set(Some(e.to_string()));
                    }
                }
            }
        }
    });

    // Column schemas are rebuilt only when their inputs change.
    let feature_columns = use_memo(move || {
        columns::for_feature(*feature.read(), *language.read(), plan.read().wedding_date())
    });

    let current_feature = *feature.read();
    let current_language = *language.read();
    let rows = plan.read().rows(current_feature).to_vec();
    let empty_message = i18n::tr(current_language, current_feature.empty_key()).to_string();
    let add_placeholder = i18n::tr(current_language, "table.add_placeholder").to_string();

    rsx! {
        document::Stylesheet { href: STYLES }
        div { class: "app",
            Toolbar { plan, language, feature, view, selected, file_path, error_message, save_success }
            InlineTable {
                key: "{current_feature:?}",
                columns: feature_columns(),
                rows,
                view,
                selectable: true,
                selected: selected.read().clone(),
                enable_inline_add: true,
                add_row_field: columns::add_field(current_feature).to_string(),
                default_new_row: columns::default_new_row(current_feature),
                empty_message,
                add_placeholder,
                on_cell_update: {
                    let mut plan = plan;
                    move |update: CellUpdate| {
                        let applied =
                            plan.with_mut(|state| state.apply_cell_update(current_feature, &update));
                        if applied {
                            debug!("cell update: {} {}", update.row_id, update.field);
                        }
                    }
                },
                on_add_row: {
                    let mut plan = plan;
                    move |fields: Fields| {
                        let id = plan.with_mut(|state| state.add_row(current_feature, fields));
                        debug!("added row {id}");
                    }
                },
                on_selection_change: {
                    let mut selected = selected;
                    move |next: Vec<RowId>| selected.set(next)
                },
            }
        }
    }
}
