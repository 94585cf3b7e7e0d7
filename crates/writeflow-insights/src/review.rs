//! Pending-review selection.

use writeflow_core::{Role, Task, TaskStatus, Viewer};

/// Tasks awaiting an administrator's judgment
///
/// Empty for non-admin viewers; otherwise every `submitted` task, input
/// order preserved.
#[must_use]
pub fn pending_reviews(tasks: &[Task], viewer: &Viewer) -> Vec<Task> {
    if viewer.role != Role::Admin {
        return Vec::new();
    }
    tasks
        .iter()
        .filter(|task| task.status == TaskStatus::Submitted)
        .cloned()
        .collect()
}
