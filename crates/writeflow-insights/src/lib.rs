//! WriteFlow Insights - role-scoped dashboard derivations
//!
//! The read side of the dashboard. Every function here is pure and
//! synchronous: it takes snapshots of the team collections plus the
//! viewer identity and returns plain data for rendering.
//!
//! - [`filter`] - what a viewer may see
//! - [`stats`] - the stats row and status distribution
//! - [`weekly`] - the weekly performance card
//! - [`review`] - the pending-review queue
//! - [`query`] - the task-list filter panel
//!
//! # Example
//!
//! ```rust
//! use writeflow_core::{Role, Viewer, WriterId};
//! use writeflow_insights::{role_stats, visible_tasks};
//!
//! let viewer = Viewer::new(WriterId::new(), "Alex Chen", Role::Admin);
//! let visible = visible_tasks(&[], &viewer);
//! let stats = role_stats(&visible, &[], &viewer);
//! assert_eq!(stats.total_tasks, 0);
//! ```

#![warn(unreachable_pub)]

pub mod filter;
pub mod query;
pub mod review;
pub mod stats;
pub mod weekly;

// Re-exports for convenience
pub use filter::{roster_name, visible_tasks, visible_writers};
pub use query::{DeadlineWindow, TaskQuery, WordCountBand};
pub use review::pending_reviews;
pub use stats::{role_stats, status_distribution, RoleStats, StatusCount};
pub use weekly::{weekly_performance, WeeklySnapshot};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
