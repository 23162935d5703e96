//! Retro Task Manager App
//!
//! Main application component: header, input panel, task list and footer.

use leptos::prelude::*;
use reactive_stores::Store;
use task_store::{StoreConfig, TaskStore};

use crate::components::{FilterBar, TaskInput, TaskList};
use crate::context::AppContext;
use crate::storage::BrowserStorage;
use crate::store::{UiState, UiStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State
    let tasks = TaskStore::load(BrowserStorage::open(), &StoreConfig::default());
    let ui = Store::new(UiState::from(tasks.snapshot().clone()));
    log::info!("[APP] Loaded {} tasks", tasks.counts().total);

    // Provide context to all children
    provide_context(ui);
    let ctx = AppContext::new(tasks, ui);
    provide_context(ctx);

    let nothing_completed = move || ui.counts().get().completed == 0;

    view! {
        <div class="appShell">
            <header class="appHeader">
                <div class="appHeader-left">
                    <div class="brand">
                        <div class="brand-badge" aria-hidden="true">"TM"</div>
                        <div class="brand-text">
                            <h1 class="brand-title">"Retro Task Manager"</h1>
                            <p class="brand-subtitle">"Your quests, saved locally. No excuses."</p>
                        </div>
                    </div>
                </div>

                <div class="appHeader-right">
                    <button
                        type="button"
                        class="btn btnGhost"
                        on:click=move |_| ctx.clear_completed()
                        disabled=nothing_completed
                        aria-disabled=move || nothing_completed().to_string()
                    >
                        "Clear completed"
                    </button>
                </div>
            </header>

            <main class="appMain">
                <section class="panel" aria-label="Task input">
                    <TaskInput />
                    <FilterBar />
                </section>

                <section class="panel panelList" aria-label="Tasks">
                    <TaskList />
                </section>

                <footer class="appFooter">
                    <div class="footerTip">
                        "Tip: Double-check completed quests before clearing them."
                    </div>
                    <div class="footerMeta">
                        "Data persists via " <code>"localStorage"</code> "."
                    </div>
                    <Show when=move || !ui.durable().get()>
                        <div class="footerWarning" role="status">
                            "Changes may not be saved. Storage is unavailable or full."
                        </div>
                    </Show>
                </footer>
            </main>
        </div>
    }
}
