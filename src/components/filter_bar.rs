//! Filter Bar Component
//!
//! Segmented filter selector and task counts.

use leptos::prelude::*;
use task_store::Filter;

use crate::context::AppContext;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let ui = use_ui_store();

    view! {
        <div class="filterBar" role="toolbar" aria-label="Task filters">
            <div class="filterBar-left">
                <span class="filterBar-label">"Filter:"</span>
                <div class="segmented" role="group" aria-label="Select filter">
                    {Filter::ALL.into_iter().map(|filter| {
                        let is_active = move || ui.filter().get() == filter;
                        view! {
                            <button
                                type="button"
                                class=move || if is_active() { "segmented-btn isActive" } else { "segmented-btn" }
                                aria-pressed=move || is_active().to_string()
                                on:click=move |_| ctx.set_filter(filter)
                            >
                                {filter.label()}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>

            <div class="filterBar-right" aria-label="Task counts">
                <span class="pill" title="Active tasks">
                    "Active: " <strong>{move || ui.counts().get().active}</strong>
                </span>
                <span class="pill" title="Completed tasks">
                    "Done: " <strong>{move || ui.counts().get().completed}</strong>
                </span>
                <span class="pill" title="All tasks">
                    "Total: " <strong>{move || ui.counts().get().total}</strong>
                </span>
            </div>
        </div>
    }
}
