//! Role capabilities.
//!
//! One table answers every "may this viewer do that?" question. Both the
//! creation operations and the lifecycle transition guard consult it, so
//! authorization lives in exactly one place.

use serde::{Deserialize, Serialize};

use crate::error::AccessError;
use crate::lifecycle;
use crate::types::{Role, Task, TaskStatus, Viewer};

/// Capabilities a viewer can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    /// Create and assign tasks
    CreateTask,
    /// Add writers to the roster
    ManageWriters,
    /// See and judge submitted work
    ReviewSubmissions,
    /// Move a task through its lifecycle
    UpdateTaskStatus,
    /// See team-wide performance figures
    ViewTeamPerformance,
}

impl Action {
    /// Wire form of the action
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Action::CreateTask => "create-task",
            Action::ManageWriters => "manage-writers",
            Action::ReviewSubmissions => "review-submissions",
            Action::UpdateTaskStatus => "update-task-status",
            Action::ViewTeamPerformance => "view-team-performance",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the viewer holds the capability
///
/// Both roles may update task status; the per-task restrictions on writers
/// are enforced by [`check_status_change`].
#[must_use]
pub fn can_perform(viewer: &Viewer, action: Action) -> bool {
    match action {
        Action::UpdateTaskStatus => true,
        Action::CreateTask
        | Action::ManageWriters
        | Action::ReviewSubmissions
        | Action::ViewTeamPerformance => viewer.role == Role::Admin,
    }
}

/// Reject the operation unless the viewer holds the capability
pub fn check(viewer: &Viewer, action: Action) -> Result<(), AccessError> {
    if can_perform(viewer, action) {
        Ok(())
    } else {
        Err(AccessError::NotPermitted {
            role: viewer.role,
            action,
        })
    }
}

/// Full guard for a status change on a concrete task
///
/// Admins may set any status. A writer may act only on tasks assigned to
/// them, may not touch a task already in review or approved, and may only
/// set a [`lifecycle::writer_settable`] status.
pub fn check_status_change(
    viewer: &Viewer,
    task: &Task,
    to: TaskStatus,
) -> Result<(), AccessError> {
    check(viewer, Action::UpdateTaskStatus)?;

    if viewer.role == Role::Admin {
        return Ok(());
    }
    if !task.is_assigned_to(viewer.id) {
        return Err(AccessError::NotAssignee);
    }
    if lifecycle::locks_writer_edits(task.status) {
        return Err(AccessError::ReviewLocked(task.status));
    }
    if !lifecycle::writer_settable(to) {
        return Err(AccessError::StatusNotSettable(to));
    }
    Ok(())
}
