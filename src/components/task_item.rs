//! Task Item Component
//!
//! One task row with completion toggle, inline rename and delete.

use leptos::html;
use leptos::prelude::*;
use task_store::{Task, TITLE_MAX_LEN};

use crate::context::AppContext;
use crate::edit::{delete_label, resolve_draft, toggle_label, DraftOutcome};

/// A single task row
///
/// Enter saves the draft, Escape cancels it. A blank draft restores the
/// current title instead of saving.
#[component]
pub fn TaskItem(task: Task) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let completed = task.completed;
    let id = StoredValue::new(task.id.clone());
    let title = StoredValue::new(task.title.clone());
    let edit_id = format!("edit-{}", task.id);

    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(task.title.clone());
    let input_ref = NodeRef::<html::Input>::new();

    // Focus and select the field when entering edit mode
    Effect::new(move |_| {
        if editing.get() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
                input.select();
            }
        }
    });

    let commit = move || {
        match resolve_draft(&draft.get_untracked(), &title.get_value()) {
            DraftOutcome::Rename(next) => ctx.rename_task(&id.get_value(), &next),
            DraftOutcome::Unchanged => {}
            DraftOutcome::Revert => set_draft.set(title.get_value()),
        }
        set_editing.set(false);
    };

    let cancel = move || {
        set_draft.set(title.get_value());
        set_editing.set(false);
    };

    let draft_is_blank = move || draft.get().trim().is_empty();

    view! {
        <li class=move || if completed { "taskItem isDone" } else { "taskItem" }>
            <label class="taskItem-check">
                <input
                    type="checkbox"
                    checked=completed
                    on:change=move |_| ctx.toggle_task(&id.get_value())
                    aria-label=toggle_label(&task.title, completed)
                />
                <span class="taskItem-checkUi" aria-hidden="true"></span>
            </label>

            <div class="taskItem-main">
                <Show
                    when=move || editing.get()
                    fallback=move || view! {
                        <div class="taskItem-titleRow">
                            <span class="taskItem-title">{title.get_value()}</span>
                            <span class="taskItem-meta" aria-label="Task status">
                                {if completed { "COMPLETED" } else { "ACTIVE" }}
                            </span>
                        </div>
                    }
                >
                    <div class="taskItem-editRow">
                        <label class="srOnly" for=edit_id.clone()>"Edit task title"</label>
                        <input
                            id=edit_id.clone()
                            node_ref=input_ref
                            class="taskItem-editField"
                            maxlength=TITLE_MAX_LEN.to_string()
                            prop:value=move || draft.get()
                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                            on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                                "Enter" => commit(),
                                "Escape" => cancel(),
                                _ => {}
                            }
                        />
                        <div class="taskItem-editHint" aria-hidden="true">
                            "Enter to save · Esc to cancel"
                        </div>
                    </div>
                </Show>
            </div>

            <div class="taskItem-actions" aria-label="Task actions">
                <Show
                    when=move || editing.get()
                    fallback=move || view! {
                        <button type="button" class="btn btnGhost" on:click=move |_| set_editing.set(true)>
                            "Edit"
                        </button>
                        <button
                            type="button"
                            class="btn btnDanger"
                            on:click=move |_| ctx.delete_task(&id.get_value())
                            aria-label=delete_label(&title.get_value())
                        >
                            "Delete"
                        </button>
                    }
                >
                    <button
                        type="button"
                        class="btn btnGhost"
                        on:click=move |_| commit()
                        disabled=draft_is_blank
                    >
                        "Save"
                    </button>
                    <button type="button" class="btn btnGhost" on:click=move |_| cancel()>
                        "Cancel"
                    </button>
                </Show>
            </div>
        </li>
    }
}
