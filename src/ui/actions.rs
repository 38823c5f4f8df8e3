use std::path::PathBuf;

use dioxus::prelude::*;
use log::{debug, warn};

use crate::columns;
use crate::io::plan_io;
use crate::state::data_model::RowId;
use crate::state::i18n::{self, Language};
use crate::state::plan::{Feature, PlanState};
use crate::state::view::TableView;

pub async fn open_plan(
    mut plan: Signal<PlanState>,
    language: Signal<Language>,
    feature: Signal<Feature>,
    mut view: Signal<TableView>,
    mut selected: Signal<Vec<RowId>>,
    mut file_path: Signal<Option<PathBuf>>,
    mut error_message: Signal<Option<String>>,
) {
    let task = rfd::AsyncFileDialog::new()
        .add_filter(i18n::tr(*language.read(), "dialog.plan_filter"), &["json"])
        .pick_file()
        .await;

    let Some(handle) = task else {
        return;
    };
    let path = handle.path().to_path_buf();

    match plan_io::load_plan(&path) {
        Ok(loaded) => {
            debug!("opened plan from {}", path.display());
            plan.with_mut(|state| state.replace(loaded));
            file_path.set(Some(path));
            error_message.set(None);
            selected.set(Vec::new());
            view.set(TableView::with_search_fields(columns::search_fields(
                *feature.read(),
            )));
        }
        Err(err) => {
            warn!("failed to open plan from {}: {err}", path.display());
            error_message.set(Some(err.to_string()));
        }
    }
}

/// Saves to the current path, or asks for one first. Returns whether the plan
/// reached disk.
pub async fn save_plan(
    mut plan: Signal<PlanState>,
    language: Signal<Language>,
    mut file_path: Signal<Option<PathBuf>>,
    mut error_message: Signal<Option<String>>,
) -> bool {
    let path = {
        let read = file_path.read();
        read.as_ref().cloned()
    };
    let path = match path {
        Some(path) => path,
        None => {
            let task = rfd::AsyncFileDialog::new()
                .add_filter(i18n::tr(*language.read(), "dialog.plan_filter"), &["json"])
                .set_file_name("wedding-plan.json")
                .save_file()
                .await;
            let Some(handle) = task else {
                return false;
            };
            handle.path().to_path_buf()
        }
    };

    let snapshot = plan.read().plan().clone();
    match plan_io::save_plan(&path, &snapshot) {
        Ok(()) => {
            debug!("saved plan to {}", path.display());
            plan.with_mut(|state| state.mark_saved());
            file_path.set(Some(path));
            error_message.set(None);
            true
        }
        Err(err) => {
            warn!("failed to save plan to {}: {err}", path.display());
            error_message.set(Some(err.to_string()));
            false
        }
    }
}
