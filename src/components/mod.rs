//! UI Components
//!
//! Leptos components for the task manager page.

mod task_input;
mod filter_bar;
mod task_list;
mod task_item;

pub use task_input::TaskInput;
pub use filter_bar::FilterBar;
pub use task_list::TaskList;
pub use task_item::TaskItem;
