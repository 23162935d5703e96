//! Task Operations
//!
//! Immutable CRUD over the canonical collection. Every function returns a
//! new collection; unknown ids leave the content unchanged.

use crate::model::Task;

/// Prepend a new task with a fresh id
pub fn add_task(tasks: &[Task], title: &str) -> Vec<Task> {
    add_task_with(tasks, Task::new(title))
}

/// Prepend a caller-built task
pub fn add_task_with(tasks: &[Task], task: Task) -> Vec<Task> {
    let mut next = Vec::with_capacity(tasks.len() + 1);
    next.push(task);
    next.extend_from_slice(tasks);
    next
}

/// Flip `completed` on the task with this id
pub fn toggle_task(tasks: &[Task], id: &str) -> Vec<Task> {
    map_matching(tasks, id, |task| Task {
        completed: !task.completed,
        ..task.clone()
    })
}

/// Remove the task with this id
pub fn delete_task(tasks: &[Task], id: &str) -> Vec<Task> {
    tasks.iter().filter(|t| t.id != id).cloned().collect()
}

/// Replace the title of the task with this id. The title is not validated here.
pub fn rename_task(tasks: &[Task], id: &str, title: &str) -> Vec<Task> {
    map_matching(tasks, id, |task| Task {
        title: title.to_string(),
        ..task.clone()
    })
}

/// Keep only tasks that are not completed
pub fn clear_completed(tasks: &[Task]) -> Vec<Task> {
    tasks.iter().filter(|t| !t.completed).cloned().collect()
}

fn map_matching(tasks: &[Task], id: &str, f: impl Fn(&Task) -> Task) -> Vec<Task> {
    tasks
        .iter()
        .map(|t| if t.id == id { f(t) } else { t.clone() })
        .collect()
}
