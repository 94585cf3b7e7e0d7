//! Summary statistics for the dashboard header.

use serde::{Deserialize, Serialize};
use writeflow_core::{Role, Task, TaskStatus, Viewer, Writer, WriterId};

/// Counts shown in the stats row
///
/// The task counts are over the viewer's visible set; `active_writers` is
/// team-wide and independent of the viewer. The two personal fields are
/// present only for writer viewers whose roster record was found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleStats {
    /// Visible tasks
    pub total_tasks: usize,
    /// Visible tasks in `pending` or `in-progress`
    pub active_tasks: usize,
    /// Visible tasks in `approved`
    pub completed_tasks: usize,
    /// Visible tasks in `submitted`
    pub submitted_tasks: usize,
    /// Active writer-role accounts on the whole roster
    pub active_writers: usize,
    /// Viewer's own deadlines-met count (writer viewers only)
    pub deadlines_met: Option<u32>,
    /// Viewer's own average rating (writer viewers only)
    pub average_rating: Option<f64>,
}

impl RoleStats {
    /// Share of visible completions that met their deadline, in percent
    ///
    /// `None` for viewers without personal figures.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn deadlines_met_percent(&self) -> Option<u32> {
        let met = self.deadlines_met?;
        let completed = self.completed_tasks.max(1);
        Some((f64::from(met) * 100.0 / completed as f64).round() as u32)
    }
}

/// Compute the stats row for a viewer
///
/// `visible` must already be scoped by [`crate::filter::visible_tasks`];
/// `writers` is the full roster.
#[must_use]
pub fn role_stats(visible: &[Task], writers: &[Writer], viewer: &Viewer) -> RoleStats {
    let mut stats = RoleStats {
        total_tasks: visible.len(),
        active_tasks: visible.iter().filter(|t| t.status.is_active()).count(),
        completed_tasks: count_status(visible, TaskStatus::Approved),
        submitted_tasks: count_status(visible, TaskStatus::Submitted),
        active_writers: writers.iter().filter(|w| w.is_active_writer()).count(),
        deadlines_met: None,
        average_rating: None,
    };

    if viewer.role == Role::Writer {
        if let Some(own) = find_writer(writers, viewer.id) {
            stats.deadlines_met = Some(own.performance.deadlines_met);
            stats.average_rating = Some(own.performance.average_rating);
        }
    }

    stats
}

/// Per-status breakdown of a task set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCount {
    /// Lifecycle status
    pub status: TaskStatus,
    /// Tasks in that status
    pub count: usize,
    /// Share of the set, in percent; `0.0` for an empty set
    pub share: f64,
}

/// Count every lifecycle status over a task set, in lifecycle order
#[must_use]
pub fn status_distribution(tasks: &[Task]) -> Vec<StatusCount> {
    let total = tasks.len();
    TaskStatus::ALL
        .into_iter()
        .map(|status| {
            let count = count_status(tasks, status);
            #[allow(clippy::cast_precision_loss)]
            let share = if total == 0 {
                0.0
            } else {
                count as f64 * 100.0 / total as f64
            };
            StatusCount {
                status,
                count,
                share,
            }
        })
        .collect()
}

fn count_status(tasks: &[Task], status: TaskStatus) -> usize {
    tasks.iter().filter(|t| t.status == status).count()
}

fn find_writer(writers: &[Writer], id: WriterId) -> Option<&Writer> {
    writers.iter().find(|w| w.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use writeflow_core::{Performance, TaskId, WriterStatus};

    fn task(status: TaskStatus, assignee: WriterId) -> Task {
        Task {
            id: TaskId::new(),
            title: "Task".to_string(),
            description: "Text".to_string(),
            word_count: 500,
            deadline: None,
            assigned_to: vec![assignee],
            status,
            tags: Vec::new(),
            created_by: WriterId::new(),
            created_at: Utc::now(),
            submitted_at: None,
            reviewed_at: None,
        }
    }

    fn writer(name: &str, performance: Performance) -> Writer {
        Writer {
            id: WriterId::new(),
            name: name.to_string(),
            email: "w@company.com".to_string(),
            bio: String::new(),
            role: Role::Writer,
            expertise: Vec::new(),
            status: WriterStatus::Active,
            team_tags: Vec::new(),
            performance,
        }
    }

    #[test]
    fn counts_over_one_of_each_interesting_status() {
        let assignee = WriterId::new();
        let visible = vec![
            task(TaskStatus::Pending, assignee),
            task(TaskStatus::InProgress, assignee),
            task(TaskStatus::Submitted, assignee),
            task(TaskStatus::Approved, assignee),
        ];
        let admin = Viewer::new(WriterId::new(), "Alex Chen", Role::Admin);

        let stats = role_stats(&visible, &[], &admin);
        assert_eq!(stats.total_tasks, 4);
        assert_eq!(stats.active_tasks, 2);
        assert_eq!(stats.submitted_tasks, 1);
        assert_eq!(stats.completed_tasks, 1);
        assert!(stats.deadlines_met.is_none());
        assert!(stats.average_rating.is_none());
    }

    #[test]
    fn active_writers_counts_only_active_writer_roles() {
        let mut inactive = writer("Benched", Performance::default());
        inactive.status = WriterStatus::Inactive;
        let mut manager = writer("Manager", Performance::default());
        manager.role = Role::Admin;
        let writers = vec![writer("Sarah", Performance::default()), inactive, manager];

        let admin = Viewer::new(WriterId::new(), "Alex Chen", Role::Admin);
        let stats = role_stats(&[], &writers, &admin);
        assert_eq!(stats.active_writers, 1);
    }

    #[test]
    fn writer_viewer_gets_own_performance_fields() {
        let own = writer(
            "Sarah Wilson",
            Performance {
                deadlines_met: 22,
                average_rating: 4.8,
                ..Performance::default()
            },
        );
        let viewer = Viewer::new(own.id, own.name.clone(), Role::Writer);

        let stats = role_stats(&[], &[own], &viewer);
        assert_eq!(stats.deadlines_met, Some(22));
        assert_eq!(stats.average_rating, Some(4.8));
    }

    #[test]
    fn missing_roster_record_degrades_to_none() {
        let viewer = Viewer::new(WriterId::new(), "Ghost", Role::Writer);
        let stats = role_stats(&[], &[writer("Sarah", Performance::default())], &viewer);
        assert!(stats.deadlines_met.is_none());
        assert!(stats.average_rating.is_none());
    }

    #[test]
    fn matching_is_by_id_not_name() {
        let record = writer("Sarah Wilson", Performance {
            deadlines_met: 22,
            ..Performance::default()
        });
        // Same display name, different account.
        let impostor = Viewer::new(WriterId::new(), "Sarah Wilson", Role::Writer);

        let stats = role_stats(&[], &[record], &impostor);
        assert!(stats.deadlines_met.is_none());
    }

    #[test]
    fn deadlines_met_percent_guards_division() {
        let stats = RoleStats {
            total_tasks: 0,
            active_tasks: 0,
            completed_tasks: 0,
            submitted_tasks: 0,
            active_writers: 0,
            deadlines_met: Some(0),
            average_rating: Some(0.0),
        };
        assert_eq!(stats.deadlines_met_percent(), Some(0));

        let stats = RoleStats {
            completed_tasks: 24,
            deadlines_met: Some(22),
            ..stats
        };
        assert_eq!(stats.deadlines_met_percent(), Some(92));
    }

    #[test]
    fn distribution_covers_every_status() {
        let assignee = WriterId::new();
        let tasks = vec![
            task(TaskStatus::Pending, assignee),
            task(TaskStatus::Pending, assignee),
            task(TaskStatus::Approved, assignee),
            task(TaskStatus::Submitted, assignee),
        ];

        let dist = status_distribution(&tasks);
        assert_eq!(dist.len(), TaskStatus::ALL.len());
        assert_eq!(dist[0].status, TaskStatus::Pending);
        assert_eq!(dist[0].count, 2);
        assert!((dist[0].share - 50.0).abs() < f64::EPSILON);

        let total: usize = dist.iter().map(|c| c.count).sum();
        assert_eq!(total, tasks.len());
    }

    #[test]
    fn distribution_of_empty_set_has_zero_shares() {
        let dist = status_distribution(&[]);
        assert!(dist.iter().all(|c| c.count == 0 && c.share == 0.0));
    }
}
