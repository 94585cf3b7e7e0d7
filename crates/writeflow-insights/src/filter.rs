//! Role-based visibility.
//!
//! Every dashboard view starts by narrowing the raw collections to what
//! the viewer is allowed to see. The filters are pure, order-preserving
//! and O(n) over the input.

use writeflow_core::{Role, Task, Viewer, Writer, WriterId};

/// Tasks the viewer may see
///
/// Admins see everything; writers see the tasks assigned to them. Input
/// order is preserved.
#[must_use]
pub fn visible_tasks(tasks: &[Task], viewer: &Viewer) -> Vec<Task> {
    match viewer.role {
        Role::Admin => tasks.to_vec(),
        Role::Writer => tasks
            .iter()
            .filter(|task| task.is_assigned_to(viewer.id))
            .cloned()
            .collect(),
    }
}

/// Roster entries the viewer may see
///
/// Admins see every writer-role record; a writer sees their own record
/// plus the admins they report to.
#[must_use]
pub fn visible_writers(writers: &[Writer], viewer: &Viewer) -> Vec<Writer> {
    match viewer.role {
        Role::Admin => writers
            .iter()
            .filter(|writer| writer.role == Role::Writer)
            .cloned()
            .collect(),
        Role::Writer => writers
            .iter()
            .filter(|writer| writer.id == viewer.id || writer.role == Role::Admin)
            .cloned()
            .collect(),
    }
}

/// Display name for an assignee id, with a fallback for unknown ids
#[must_use]
pub fn roster_name(writers: &[Writer], id: WriterId) -> String {
    writers
        .iter()
        .find(|writer| writer.id == id)
        .map_or_else(|| "Unassigned".to_string(), |writer| writer.name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use writeflow_core::{Performance, TaskId, TaskStatus, WriterStatus};

    fn task(assignee: WriterId) -> Task {
        Task {
            id: TaskId::new(),
            title: "Task".to_string(),
            description: "Text".to_string(),
            word_count: 500,
            deadline: None,
            assigned_to: vec![assignee],
            status: TaskStatus::Pending,
            tags: Vec::new(),
            created_by: WriterId::new(),
            created_at: Utc::now(),
            submitted_at: None,
            reviewed_at: None,
        }
    }

    fn roster_entry(name: &str, role: Role) -> Writer {
        Writer {
            id: WriterId::new(),
            name: name.to_string(),
            email: format!("{}@company.com", name.to_lowercase().replace(' ', ".")),
            bio: String::new(),
            role,
            expertise: Vec::new(),
            status: WriterStatus::Active,
            team_tags: Vec::new(),
            performance: Performance::default(),
        }
    }

    #[test]
    fn admin_sees_all_tasks_in_order() {
        let tasks = vec![task(WriterId::new()), task(WriterId::new())];
        let admin = Viewer::new(WriterId::new(), "Alex Chen", Role::Admin);

        assert_eq!(visible_tasks(&tasks, &admin), tasks);
    }

    #[test]
    fn writer_sees_only_assigned_tasks() {
        let sarah = WriterId::new();
        let tasks = vec![task(sarah), task(WriterId::new()), task(sarah)];
        let viewer = Viewer::new(sarah, "Sarah Wilson", Role::Writer);

        let visible = visible_tasks(&tasks, &viewer);
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|t| t.is_assigned_to(sarah)));
    }

    #[test]
    fn writer_sees_multi_assigned_tasks() {
        let sarah = WriterId::new();
        let mike = WriterId::new();
        let mut shared = task(mike);
        shared.assigned_to.push(sarah);

        let viewer = Viewer::new(sarah, "Sarah Wilson", Role::Writer);
        assert_eq!(visible_tasks(&[shared], &viewer).len(), 1);
    }

    #[test]
    fn admin_roster_excludes_admin_records() {
        let writers = vec![
            roster_entry("Sarah Wilson", Role::Writer),
            roster_entry("Team Manager", Role::Admin),
            roster_entry("Mike Chen", Role::Writer),
        ];
        let admin = Viewer::new(WriterId::new(), "Alex Chen", Role::Admin);

        let visible = visible_writers(&writers, &admin);
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|w| w.role == Role::Writer));
    }

    #[test]
    fn writer_roster_is_self_plus_admins() {
        let sarah = roster_entry("Sarah Wilson", Role::Writer);
        let writers = vec![
            sarah.clone(),
            roster_entry("Team Manager", Role::Admin),
            roster_entry("Mike Chen", Role::Writer),
        ];
        let viewer = Viewer::new(sarah.id, sarah.name.clone(), Role::Writer);

        let visible = visible_writers(&writers, &viewer);
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().any(|w| w.id == sarah.id));
        assert!(visible.iter().any(|w| w.role == Role::Admin));
    }

    #[test]
    fn roster_name_falls_back_to_unassigned() {
        let writers = vec![roster_entry("Sarah Wilson", Role::Writer)];
        assert_eq!(roster_name(&writers, writers[0].id), "Sarah Wilson");
        assert_eq!(roster_name(&writers, WriterId::new()), "Unassigned");
    }
}
