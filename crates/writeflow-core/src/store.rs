//! In-memory team store.
//!
//! [`TeamHandle`] owns the task, roster and template registries and is the
//! only path through which records change. Reads hand out snapshots in
//! insertion order; the pure derivations over those snapshots live in the
//! `writeflow-insights` crate.
//!
//! Mutations serialize behind write locks. Hosts embedding the store in a
//! concurrent runtime must funnel all mutating calls through one owner;
//! snapshot reads may run from anywhere.

use chrono::Utc;
use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::capability::{self, Action};
use crate::changelog::ChangeLog;
use crate::error::{StoreError, ValidationError};
use crate::template::{TaskTemplate, TemplateDraft};
use crate::types::{
    Performance, Role, Task, TaskDraft, TaskId, TaskStatus, TemplateId, Viewer, Writer,
    WriterDraft, WriterId, WriterStatus,
};

/// Main team-store handle
pub struct TeamHandle {
    tasks: RwLock<IndexMap<TaskId, Task>>,
    writers: RwLock<IndexMap<WriterId, Writer>>,
    templates: RwLock<IndexMap<TemplateId, TaskTemplate>>,
    change_log: ChangeLog,
}

impl TeamHandle {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: RwLock::new(IndexMap::new()),
            writers: RwLock::new(IndexMap::new()),
            templates: RwLock::new(IndexMap::new()),
            change_log: ChangeLog::default(),
        }
    }

    /// Snapshot of all tasks, creation order preserved
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.read().values().cloned().collect()
    }

    /// Snapshot of the roster, registration order preserved
    #[must_use]
    pub fn writers(&self) -> Vec<Writer> {
        self.writers.read().values().cloned().collect()
    }

    /// Snapshot of all templates, creation order preserved
    #[must_use]
    pub fn templates(&self) -> Vec<TaskTemplate> {
        self.templates.read().values().cloned().collect()
    }

    /// Look up one task
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<Task> {
        self.tasks.read().get(&id).cloned()
    }

    /// Look up one writer
    #[must_use]
    pub fn writer(&self, id: WriterId) -> Option<Writer> {
        self.writers.read().get(&id).cloned()
    }

    /// The mutation log
    #[must_use]
    pub fn change_log(&self) -> &ChangeLog {
        &self.change_log
    }

    /// Install a host-supplied writer record
    ///
    /// The store holds whatever collections the host supplies; seeding and
    /// restores go through here. Replaces any record with the same id in
    /// place, keeping its roster position. Not capability-gated and not
    /// logged.
    pub fn load_writer(&self, writer: Writer) {
        self.writers.write().insert(writer.id, writer);
    }

    /// Install a host-supplied task record
    ///
    /// Counterpart of [`Self::load_writer`] for tasks.
    pub fn load_task(&self, task: Task) {
        self.tasks.write().insert(task.id, task);
    }

    /// Create a task
    ///
    /// Admin-only. The title and description are required, and every
    /// assignee must resolve to an active writer on the roster. The new
    /// task starts in `pending` with both review stamps unset.
    pub fn create_task(&self, draft: TaskDraft, viewer: &Viewer) -> Result<Task, StoreError> {
        capability::check(viewer, Action::CreateTask)?;

        if draft.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title").into());
        }
        if draft.description.trim().is_empty() {
            return Err(ValidationError::MissingField("description").into());
        }
        if draft.assigned_to.is_empty() {
            return Err(ValidationError::NoAssignee.into());
        }
        {
            let writers = self.writers.read();
            for assignee in &draft.assigned_to {
                match writers.get(assignee) {
                    None => return Err(ValidationError::UnknownAssignee(*assignee).into()),
                    Some(writer) if !writer.is_active_writer() => {
                        return Err(ValidationError::IneligibleAssignee(*assignee).into());
                    }
                    Some(_) => {}
                }
            }
        }

        let task = Task {
            id: TaskId::new(),
            title: draft.title,
            description: draft.description,
            word_count: draft.word_count,
            deadline: draft.deadline,
            assigned_to: draft.assigned_to,
            status: TaskStatus::Pending,
            tags: draft.tags,
            created_by: viewer.id,
            created_at: Utc::now(),
            submitted_at: None,
            reviewed_at: None,
        };

        self.tasks.write().insert(task.id, task.clone());
        tracing::info!(task = %task.id, title = %task.title, "task created");
        self.change_log
            .append(viewer.id, "create_task", format!("created {:?}", task.title));
        Ok(task)
    }

    /// Add a writer to the roster
    ///
    /// Admin-only. Name and email are required. The record is forced to
    /// the writer role, starts active, and carries zeroed performance.
    pub fn create_writer(&self, draft: WriterDraft, viewer: &Viewer) -> Result<Writer, StoreError> {
        capability::check(viewer, Action::ManageWriters)?;

        if draft.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name").into());
        }
        if draft.email.trim().is_empty() {
            return Err(ValidationError::MissingField("email").into());
        }

        let writer = Writer {
            id: WriterId::new(),
            name: draft.name,
            email: draft.email,
            bio: draft.bio,
            role: Role::Writer,
            expertise: draft.expertise,
            status: WriterStatus::Active,
            team_tags: draft.team_tags,
            performance: Performance::default(),
        };

        self.writers.write().insert(writer.id, writer.clone());
        tracing::info!(writer = %writer.id, name = %writer.name, "writer added");
        self.change_log
            .append(viewer.id, "create_writer", format!("added {:?}", writer.name));
        Ok(writer)
    }

    /// Create a task template
    ///
    /// Admin-only. Template titles are unique, compared case-insensitively.
    pub fn create_template(
        &self,
        draft: TemplateDraft,
        viewer: &Viewer,
    ) -> Result<TaskTemplate, StoreError> {
        capability::check(viewer, Action::CreateTask)?;

        if draft.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title").into());
        }
        if draft.description.trim().is_empty() {
            return Err(ValidationError::MissingField("description").into());
        }

        let mut templates = self.templates.write();
        if templates
            .values()
            .any(|existing| existing.title.eq_ignore_ascii_case(&draft.title))
        {
            return Err(ValidationError::DuplicateTemplate(draft.title).into());
        }

        let template = TaskTemplate {
            id: TemplateId::new(),
            title: draft.title,
            description: draft.description,
            word_count: draft.word_count,
            tags: draft.tags,
            category: draft.category,
            created_at: Utc::now(),
        };
        templates.insert(template.id, template.clone());
        drop(templates);

        tracing::info!(template = %template.id, title = %template.title, "template created");
        self.change_log.append(
            viewer.id,
            "create_template",
            format!("created template {:?}", template.title),
        );
        Ok(template)
    }

    /// Move a task to a new lifecycle status
    ///
    /// The role-dependent guard is [`capability::check_status_change`].
    /// The first transition into `submitted` stamps `submitted_at`, the
    /// first into `in-review` stamps `reviewed_at`; repeating a transition
    /// never re-stamps, and no other field changes.
    pub fn set_task_status(
        &self,
        task_id: TaskId,
        to: TaskStatus,
        viewer: &Viewer,
    ) -> Result<Task, StoreError> {
        let mut tasks = self.tasks.write();
        let task = tasks
            .get_mut(&task_id)
            .ok_or(StoreError::TaskNotFound(task_id))?;

        capability::check_status_change(viewer, task, to).map_err(|err| {
            tracing::warn!(task = %task_id, to = %to, %err, "status change rejected");
            StoreError::from(err)
        })?;

        let from = task.status;
        task.status = to;
        let now = Utc::now();
        if to == TaskStatus::Submitted && task.submitted_at.is_none() {
            task.submitted_at = Some(now);
        }
        if to == TaskStatus::InReview && task.reviewed_at.is_none() {
            task.reviewed_at = Some(now);
        }
        let updated = task.clone();
        drop(tasks);

        tracing::info!(task = %task_id, %from, %to, "task status updated");
        self.change_log.append(
            viewer.id,
            "set_task_status",
            format!("{:?}: {from} -> {to}", updated.title),
        );
        Ok(updated)
    }
}

impl Default for TeamHandle {
    fn default() -> Self {
        Self::new()
    }
}
