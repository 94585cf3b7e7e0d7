//! WriteFlow Core - team store for a content-writing workflow
//!
//! The mutation side of the dashboard:
//! - Holds the Task/Writer/Template records in memory
//! - Enforces the task lifecycle and its role-dependent guard
//! - Gates every operation through one capability table
//! - Records mutations in an append-only change log
//!
//! # Example
//!
//! ```rust
//! use writeflow_core::{Role, TaskDraft, TaskStatus, TeamHandle, Viewer, WriterDraft, WriterId};
//!
//! # fn example() -> Result<(), writeflow_core::StoreError> {
//! let store = TeamHandle::new();
//! let admin = Viewer::new(WriterId::new(), "Alex Chen", Role::Admin);
//!
//! let writer = store.create_writer(WriterDraft::new("Sarah Wilson", "sarah@company.com"), &admin)?;
//! let draft = TaskDraft::new("Blog post", "AI in content marketing").assign_to(writer.id);
//! let task = store.create_task(draft, &admin)?;
//!
//! assert_eq!(task.status, TaskStatus::Pending);
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

// Core modules
pub mod capability;
pub mod changelog;
pub mod error;
pub mod lifecycle;
pub mod store;
pub mod template;
pub mod types;

// Re-exports for convenience
pub use capability::{can_perform, check, check_status_change, Action};
pub use changelog::{ChangeEvent, ChangeLog};
pub use error::{AccessError, StoreError, TransitionError, ValidationError};
pub use store::TeamHandle;
pub use template::{TaskTemplate, TemplateCategory, TemplateDraft};
pub use types::{
    EventId, Performance, Role, Task, TaskDraft, TaskId, TaskStatus, TemplateId, Viewer, Writer,
    WriterDraft, WriterId, WriterStatus,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the team store
    pub use crate::{
        Action, Role, StoreError, Task, TaskDraft, TaskId, TaskStatus, TeamHandle, Viewer, Writer,
        WriterDraft, WriterId, WriterStatus,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
