use std::path::PathBuf;

use dioxus::prelude::*;

use crate::columns;
use crate::state::data_model::RowId;
use crate::state::i18n::{self, Language};
use crate::state::plan::{Feature, PlanState};
use crate::state::view::TableView;
use crate::ui::actions;

#[component]
pub fn Toolbar(
    plan: Signal<PlanState>,
    language: Signal<Language>,
    feature: Signal<Feature>,
    view: Signal<TableView>,
    selected: Signal<Vec<RowId>>,
    file_path: Signal<Option<PathBuf>>,
    error_message: Signal<Option<String>>,
    save_success: Signal<bool>,
) -> Element {
    let current_language = *language.read();
    let current_feature = *feature.read();
    let search_query_value = view.read().search_query().to_string();
    let wedding_date_value = plan
        .read()
        .plan()
        .wedding_date
        .clone()
        .unwrap_or_default();
    let selected_count = selected.read().len();
    let dirty = plan.read().is_dirty();

    let open_label = i18n::tr(current_language, "toolbar.open");
    let save_label = i18n::tr(current_language, "toolbar.save");
    let save_success_label = i18n::tr(current_language, "toolbar.save_success");
    let search_placeholder = i18n::tr(current_language, "toolbar.search_placeholder");
    let wedding_date_label = i18n::tr(current_language, "toolbar.wedding_date");
    let delete_selected_label = i18n::tr(current_language, "toolbar.delete_selected");
    let unsaved_label = i18n::tr(current_language, "toolbar.unsaved");

    rsx! {
        div { class: "toolbar",
            // File group
            div { class: "toolbar-group",
                select {
                    class: "toolbar-select toolbar-select-sm",
                    value: "{current_language.code()}",
                    onchange: move |evt| {
                        if let Some(next_language) = Language::from_code(&evt.value()) {
                            language.set(next_language);
                        }
                    },
                    for lang in Language::all().iter().copied() {
                        option { value: "{lang.code()}", "{i18n::tr(current_language, lang.label_key())}" }
                    }
                }
                button {
                    class: "toolbar-btn",
                    onclick: move |_| {
                        spawn(async move {
                            actions::open_plan(
                                plan, language, feature, view, selected, file_path, error_message,
                            )
                            .await;
                        });
                    },
                    "\u{1F4C2} {open_label}"
                }
                button {
                    class: "toolbar-btn",
                    onclick: move |_| {
                        spawn(async move {
                            let saved =
                                actions::save_plan(plan, language, file_path, error_message).await;
                            if saved {
                                save_success.set(true);
                                tokio::time::sleep(std::time::Duration::from_secs(2)).await;
                                save_success.set(false);
                            }
                        });
                    },
                    "\u{1F4BE} {save_label}"
                }
                if *save_success.read() {
                    span { class: "save-success", "\u{2714} {save_success_label}" }
                }
            }
            div { class: "toolbar-separator" }

            // Feature tabs
            div { class: "toolbar-group",
                for tab in Feature::all().iter().copied() {
                    button {
                        class: if tab == current_feature { "toolbar-btn tab active" } else { "toolbar-btn tab" },
                        onclick: move |_| {
                            feature.set(tab);
                            view.set(TableView::with_search_fields(columns::search_fields(tab)));
                            selected.set(Vec::new());
                        },
                        "{i18n::tr(current_language, tab.label_key())}"
                    }
                }
            }
            div { class: "toolbar-separator" }

            // Search group
            div { class: "toolbar-group",
                input {
                    class: "toolbar-input",
                    placeholder: "{search_placeholder}",
                    value: "{search_query_value}",
                    oninput: move |evt| {
                        let query = evt.value();
                        view.with_mut(|v| v.set_search(query));
                    }
                }
            }
            div { class: "toolbar-separator" }

            // Plan group
            div { class: "toolbar-group",
                span { class: "toolbar-label", "{wedding_date_label}" }
                input {
                    class: "toolbar-input toolbar-input-sm",
                    r#type: "date",
                    value: "{wedding_date_value}",
                    oninput: move |evt| {
                        plan.with_mut(|state| state.set_wedding_date(&evt.value()));
                    }
                }
                button {
                    class: "toolbar-btn toolbar-btn-danger",
                    disabled: selected_count == 0,
                    onclick: move |_| {
                        let ids = selected.read().clone();
                        plan.with_mut(|state| {
                            state.delete_rows(current_feature, &ids);
                        });
                        selected.set(Vec::new());
                    },
                    "\u{1F5D1} {delete_selected_label} ({selected_count})"
                }
            }

            // Info area (right-aligned)
            div { class: "toolbar-info",
                if dirty {
                    span { class: "unsaved-marker", "\u{25CF} {unsaved_label}" }
                }
                if let Some(path) = file_path.read().as_ref() {
                    span { class: "file-path", "{path.display()}" }
                }
                if let Some(err) = error_message.read().as_ref() {
                    span { class: "error-message", "{err}" }
                }
            }
        }
    }
}
