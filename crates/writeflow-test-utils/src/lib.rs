//! Testing utilities for the WriteFlow workspace
//!
//! Shared fixtures: a small seeded team mirroring the product demo data.

#![allow(missing_docs)]

use chrono::{Duration, Utc};
use writeflow_core::{
    Performance, Role, Task, TaskId, TaskStatus, TeamHandle, Viewer, Writer, WriterId,
    WriterStatus,
};

/// A seeded store plus the identities tests act as.
pub struct SampleTeam {
    pub store: TeamHandle,
    pub admin: Viewer,
    pub sarah: Writer,
    pub mike: Writer,
}

pub fn writer_named(name: &str, performance: Performance) -> Writer {
    Writer {
        id: WriterId::new(),
        name: name.to_string(),
        email: format!("{}@company.com", name.to_lowercase().replace(' ', ".")),
        bio: String::new(),
        role: Role::Writer,
        expertise: Vec::new(),
        status: WriterStatus::Active,
        team_tags: Vec::new(),
        performance,
    }
}

pub fn admin_viewer() -> Viewer {
    Viewer::new(WriterId::new(), "Team Manager", Role::Admin)
}

pub fn viewer_for(writer: &Writer) -> Viewer {
    Viewer::new(writer.id, writer.name.clone(), writer.role)
}

pub fn task_assigned_to(writer_id: WriterId, status: TaskStatus) -> Task {
    let now = Utc::now();
    Task {
        id: TaskId::new(),
        title: "Sample task".to_string(),
        description: "Sample description".to_string(),
        word_count: 800,
        deadline: Some(now.date_naive() + Duration::days(3)),
        assigned_to: vec![writer_id],
        status,
        tags: vec!["sample".to_string()],
        created_by: WriterId::new(),
        created_at: now,
        submitted_at: matches!(status, TaskStatus::Submitted | TaskStatus::InReview)
            .then(|| now - Duration::hours(6)),
        reviewed_at: (status == TaskStatus::InReview).then_some(now),
    }
}

/// Seed a store with two writers and the demo's task mix: one task per
/// writer plus a submitted one awaiting review.
pub fn sample_team() -> SampleTeam {
    let store = TeamHandle::new();
    let admin = admin_viewer();

    let sarah = writer_named(
        "Sarah Wilson",
        Performance {
            completed_tasks: 24,
            total_word_count: 48_000,
            deadlines_met: 22,
            average_rating: 4.8,
            weekly_word_count: 3200,
            weekly_tasks_completed: 2,
        },
    );
    let mike = writer_named(
        "Mike Chen",
        Performance {
            completed_tasks: 18,
            total_word_count: 32_000,
            deadlines_met: 17,
            average_rating: 4.6,
            weekly_word_count: 1800,
            weekly_tasks_completed: 3,
        },
    );

    store.load_writer(sarah.clone());
    store.load_writer(mike.clone());
    store.load_task(task_assigned_to(sarah.id, TaskStatus::InProgress));
    store.load_task(task_assigned_to(mike.id, TaskStatus::Pending));
    store.load_task(task_assigned_to(sarah.id, TaskStatus::Submitted));

    SampleTeam {
        store,
        admin,
        sarah,
        mike,
    }
}
