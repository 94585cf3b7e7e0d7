//! Error types for the team store
//!
//! One enum per concern:
//! - [`ValidationError`] - required creation input missing or unusable
//! - [`TransitionError`] - target status outside the lifecycle enumeration
//! - [`AccessError`] - viewer lacks capability for the requested operation
//!
//! All of them are recoverable by the caller; none abort the process.

use crate::capability::Action;
use crate::types::{Role, TaskId, TaskStatus, WriterId};

/// Top-level store error
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Creation input rejected
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Status change rejected
    #[error("transition rejected: {0}")]
    Transition(#[from] TransitionError),

    /// Viewer lacks the capability
    #[error("forbidden: {0}")]
    Forbidden(#[from] AccessError),

    /// No task under the given id
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// No writer under the given id
    #[error("writer not found: {0}")]
    WriterNotFound(WriterId),
}

impl StoreError {
    /// Whether the error came from input validation
    #[inline]
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Whether the error is an authorization rejection
    #[inline]
    #[must_use]
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden(_))
    }
}

/// Creation input rejections
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required text field is missing or empty
    #[error("required field missing: {0}")]
    MissingField(&'static str),

    /// Tasks carry at least one assignee
    #[error("task must be assigned to at least one writer")]
    NoAssignee,

    /// Assignee id does not resolve to a roster record
    #[error("assignee {0} is not on the roster")]
    UnknownAssignee(WriterId),

    /// Only active writers are eligible for new assignments
    #[error("assignee {0} is not an active writer")]
    IneligibleAssignee(WriterId),

    /// Template titles are unique, compared case-insensitively
    #[error("a template titled {0:?} already exists")]
    DuplicateTemplate(String),
}

/// Lifecycle status rejections
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    /// The string does not name a lifecycle status
    #[error("unknown task status {0:?}")]
    UnknownStatus(String),
}

/// Authorization rejections
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    /// The role does not carry the capability
    #[error("{role} may not {action}")]
    NotPermitted {
        /// Viewer role
        role: Role,
        /// Requested capability
        action: Action,
    },

    /// Writers may only touch their own tasks
    #[error("task is assigned to another writer")]
    NotAssignee,

    /// Once a task enters review, only admins may move it
    #[error("a task in {0} can no longer be updated by its writer")]
    ReviewLocked(TaskStatus),

    /// Review verdicts are reserved for admins
    #[error("writers may not set {0}")]
    StatusNotSettable(TaskStatus),
}
