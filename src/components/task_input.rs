//! Task Input Component
//!
//! Form for creating new tasks.

use leptos::prelude::*;
use task_store::TITLE_MAX_LEN;

use crate::context::AppContext;

/// Text field plus Add button; submits the trimmed title
#[component]
pub fn TaskInput() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (title, set_title) = signal(String::new());
    let can_submit = move || !title.get().trim().is_empty();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = title.get();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }
        ctx.add_task(trimmed);
        set_title.set(String::new());
    };

    view! {
        <form class="taskInput" on:submit=submit aria-label="Add a task">
            <label class="srOnly" for="new-task">"New task"</label>
            <input
                id="new-task"
                class="taskInput-field"
                type="text"
                placeholder="Type a quest... (e.g., 'Defeat the bug')"
                autocomplete="off"
                maxlength=TITLE_MAX_LEN.to_string()
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <button
                class="btn btnPrimary"
                type="submit"
                disabled=move || !can_submit()
                aria-disabled=move || (!can_submit()).to_string()
            >
                "Add"
            </button>
        </form>
    }
}
