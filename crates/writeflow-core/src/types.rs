//! Core types for the WriteFlow domain
//!
//! Defines the records the team store holds:
//! - Tasks and their lifecycle status
//! - Writer profiles with performance figures
//! - The viewer identity every operation is scoped to
//! - Draft inputs for the creation operations

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::error::TransitionError;

/// Unique task identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(pub Uuid);

impl TaskId {
    /// Generate new task ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique writer identifier
///
/// Admin accounts are writer records too; the id namespace is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WriterId(pub Uuid);

impl WriterId {
    /// Generate new writer ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WriterId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for WriterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique task-template identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TemplateId(pub Uuid);

impl TemplateId {
    /// Generate new template ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TemplateId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique change-log event identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(pub Uuid);

impl EventId {
    /// Generate new event ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Team manager: creates tasks, manages the roster, reviews submissions
    Admin,
    /// Content writer: works their assigned tasks
    Writer,
}

impl Role {
    /// Wire form of the role
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Writer => "writer",
        }
    }

    /// Check for administrative capability
    #[inline]
    #[must_use]
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Created, not yet started
    Pending,
    /// Being written
    InProgress,
    /// Handed in by the writer, awaiting review
    Submitted,
    /// Under administrative review
    InReview,
    /// Accepted; terminal
    Approved,
    /// Sent back for rework
    NeedsRevision,
}

impl TaskStatus {
    /// Every status, in lifecycle order
    pub const ALL: [TaskStatus; 6] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Submitted,
        TaskStatus::InReview,
        TaskStatus::Approved,
        TaskStatus::NeedsRevision,
    ];

    /// Wire form of the status (`"in-progress"` etc.)
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Submitted => "submitted",
            TaskStatus::InReview => "in-review",
            TaskStatus::Approved => "approved",
            TaskStatus::NeedsRevision => "needs-revision",
        }
    }

    /// Statuses counted as active work
    #[inline]
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, TaskStatus::Pending | TaskStatus::InProgress)
    }

    /// Whether the lifecycle ends here
    #[inline]
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, TaskStatus::Approved)
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = TransitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| TransitionError::UnknownStatus(s.to_string()))
    }
}

/// Writer availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriterStatus {
    /// Eligible for new assignments
    Active,
    /// Off the rotation
    Inactive,
}

impl WriterStatus {
    /// Wire form of the status
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            WriterStatus::Active => "active",
            WriterStatus::Inactive => "inactive",
        }
    }
}

impl std::fmt::Display for WriterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rolling performance figures kept on each writer record
///
/// The weekly fields are maintained by the host (reset at week boundaries);
/// the store only zero-initializes them on writer creation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Performance {
    /// Tasks taken all the way to approval
    pub completed_tasks: u32,
    /// Lifetime words delivered
    pub total_word_count: u64,
    /// Completed tasks delivered on or before deadline
    pub deadlines_met: u32,
    /// Mean review rating in `[0, 5]`; `0.0` means not yet rated
    pub average_rating: f64,
    /// Words delivered in the current week
    pub weekly_word_count: u64,
    /// Tasks completed in the current week
    pub weekly_tasks_completed: u32,
}

impl Performance {
    /// Whether the writer has a usable rating
    #[inline]
    #[must_use]
    pub fn is_rated(&self) -> bool {
        self.average_rating > 0.0
    }
}

/// A writing assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Task identifier, assigned at creation
    pub id: TaskId,
    /// Short title
    pub title: String,
    /// Requirements text
    pub description: String,
    /// Target length in words
    pub word_count: u32,
    /// Due date, if any
    pub deadline: Option<NaiveDate>,
    /// Assigned writers; never empty
    pub assigned_to: Vec<WriterId>,
    /// Current lifecycle status
    pub status: TaskStatus,
    /// Free-form labels, insertion order preserved
    pub tags: Vec<String>,
    /// Creating account
    pub created_by: WriterId,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// First transition into `submitted`; never re-stamped
    pub submitted_at: Option<DateTime<Utc>>,
    /// First transition into `in-review`; never re-stamped
    pub reviewed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Whether `writer_id` is among the assignees
    #[inline]
    #[must_use]
    pub fn is_assigned_to(&self, writer_id: WriterId) -> bool {
        self.assigned_to.contains(&writer_id)
    }
}

/// A team member record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Writer {
    /// Writer identifier
    pub id: WriterId,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Short background blurb
    pub bio: String,
    /// Account role
    pub role: Role,
    /// Skill tags, in profile order
    pub expertise: Vec<String>,
    /// Availability
    pub status: WriterStatus,
    /// Grouping labels, in profile order
    pub team_tags: Vec<String>,
    /// Rolling performance figures
    pub performance: Performance,
}

impl Writer {
    /// Active writer-role accounts count toward team capacity
    #[inline]
    #[must_use]
    pub fn is_active_writer(&self) -> bool {
        self.status == WriterStatus::Active && self.role == Role::Writer
    }
}

/// The identity on whose behalf an operation runs
///
/// Supplied by the caller per call; the core never stores or mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewer {
    /// Account identifier
    pub id: WriterId,
    /// Display name
    pub name: String,
    /// Account role
    pub role: Role,
}

impl Viewer {
    /// Create a viewer identity
    #[inline]
    #[must_use]
    pub fn new(id: WriterId, name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            role,
        }
    }

    /// Check for administrative capability
    #[inline]
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Input for task creation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    /// Short title; required
    pub title: String,
    /// Requirements text; required
    pub description: String,
    /// Target length in words
    pub word_count: u32,
    /// Due date, if any
    pub deadline: Option<NaiveDate>,
    /// Assigned writers; at least one required
    pub assigned_to: Vec<WriterId>,
    /// Free-form labels
    pub tags: Vec<String>,
}

impl TaskDraft {
    /// Create a draft with the required text fields
    #[inline]
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// With target word count
    #[inline]
    #[must_use]
    pub fn with_word_count(mut self, word_count: u32) -> Self {
        self.word_count = word_count;
        self
    }

    /// With due date
    #[inline]
    #[must_use]
    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Add an assignee
    #[inline]
    #[must_use]
    pub fn assign_to(mut self, writer_id: WriterId) -> Self {
        self.assigned_to.push(writer_id);
        self
    }

    /// With labels
    #[inline]
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

/// Input for writer creation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WriterDraft {
    /// Display name; required
    pub name: String,
    /// Contact email; required
    pub email: String,
    /// Short background blurb
    pub bio: String,
    /// Skill tags
    pub expertise: Vec<String>,
    /// Grouping labels
    pub team_tags: Vec<String>,
}

impl WriterDraft {
    /// Create a draft with the required fields
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    /// With bio text
    #[inline]
    #[must_use]
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }

    /// With skill tags
    #[inline]
    #[must_use]
    pub fn with_expertise(mut self, expertise: Vec<String>) -> Self {
        self.expertise = expertise;
        self
    }

    /// With grouping labels
    #[inline]
    #[must_use]
    pub fn with_team_tags(mut self, team_tags: Vec<String>) -> Self {
        self.team_tags = team_tags;
        self
    }
}
