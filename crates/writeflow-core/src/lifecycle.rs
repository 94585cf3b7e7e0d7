//! Task lifecycle.
//!
//! The nominal path is `pending → in-progress → submitted → in-review`,
//! with review resolving to `approved` or `needs-revision`; a task sent
//! back for revision re-enters `in-progress`. `approved` is terminal.
//!
//! The forward order is a hint for callers building status controls; the
//! store's transition guard is role-based - admins may move a task to any
//! status, writers are limited to [`writer_settable`] targets on their own
//! unlocked tasks.

use crate::types::TaskStatus;

/// Successor statuses along the nominal forward path
#[must_use]
pub fn allowed_transitions(from: TaskStatus) -> Vec<TaskStatus> {
    use TaskStatus::*;
    match from {
        Pending => vec![InProgress],
        InProgress => vec![Submitted],
        Submitted => vec![InReview],
        InReview => vec![Approved, NeedsRevision],
        NeedsRevision => vec![InProgress],
        Approved => vec![],
    }
}

/// Whether `from → to` follows the nominal forward path
#[must_use]
pub fn is_forward(from: TaskStatus, to: TaskStatus) -> bool {
    allowed_transitions(from).into_iter().any(|s| s == to)
}

/// Statuses a writer may set on their own tasks
///
/// Review verdicts (`in-review`, `approved`, `needs-revision`) are
/// reserved for admins.
#[must_use]
pub fn writer_settable(status: TaskStatus) -> bool {
    matches!(
        status,
        TaskStatus::Pending | TaskStatus::InProgress | TaskStatus::Submitted
    )
}

/// Statuses that lock a task against further writer edits
#[must_use]
pub fn locks_writer_edits(status: TaskStatus) -> bool {
    matches!(status, TaskStatus::InReview | TaskStatus::Approved)
}
