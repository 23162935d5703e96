//! Task List Component
//!
//! Visible tasks, or an empty-state message.

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn TaskList() -> impl IntoView {
    let ui = use_ui_store();
    let is_empty = move || ui.visible().read().is_empty();

    view! {
        <Show
            when=move || !is_empty()
            fallback=|| view! {
                <div class="emptyState" role="status" aria-live="polite">
                    <div class="emptyState-title">"No quests here."</div>
                    <div class="emptyState-subtitle">
                        "Add a task above to begin your retro adventure."
                    </div>
                </div>
            }
        >
            <ul class="taskList" aria-label="Task list">
                <For
                    each=move || ui.visible().get()
                    // Key on the mutable fields too so edited rows re-render
                    key=|task| (task.id.clone(), task.title.clone(), task.completed)
                    children=move |task| view! { <TaskItem task=task /> }
                />
            </ul>
        </Show>
    }
}
