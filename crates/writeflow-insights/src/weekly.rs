//! Weekly performance snapshot.
//!
//! Derived entirely from the rolling figures on writer records - the host
//! maintains those per week; nothing here re-derives them from task
//! history.

use serde::{Deserialize, Serialize};
use writeflow_core::{Role, Task, Viewer, Writer};

/// The three figures in the weekly performance card
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeeklySnapshot {
    /// Words delivered this week
    pub total_words: u64,
    /// Tasks completed this week
    pub tasks_completed: u32,
    /// Mean rating; `0.0` when no rated writer contributes
    pub average_rating: f64,
}

/// Compute the weekly snapshot for a viewer
///
/// Admins get team-wide totals over writer-role records, with the rating
/// averaged only over writers that have one. A writer gets their own
/// record's figures verbatim, zeros when the record is missing.
///
/// The visible task set is accepted for interface symmetry with the other
/// derivations; the snapshot depends only on `writers` and `viewer`.
#[must_use]
pub fn weekly_performance(
    _visible_tasks: &[Task],
    writers: &[Writer],
    viewer: &Viewer,
) -> WeeklySnapshot {
    match viewer.role {
        Role::Admin => {
            let team: Vec<&Writer> = writers.iter().filter(|w| w.role == Role::Writer).collect();

            let total_words = team.iter().map(|w| w.performance.weekly_word_count).sum();
            let tasks_completed = team
                .iter()
                .map(|w| w.performance.weekly_tasks_completed)
                .sum();

            let ratings: Vec<f64> = team
                .iter()
                .filter(|w| w.performance.is_rated())
                .map(|w| w.performance.average_rating)
                .collect();
            #[allow(clippy::cast_precision_loss)]
            let average_rating = if ratings.is_empty() {
                0.0
            } else {
                ratings.iter().sum::<f64>() / ratings.len() as f64
            };

            WeeklySnapshot {
                total_words,
                tasks_completed,
                average_rating,
            }
        }
        Role::Writer => writers
            .iter()
            .find(|w| w.id == viewer.id)
            .map(|own| WeeklySnapshot {
                total_words: own.performance.weekly_word_count,
                tasks_completed: own.performance.weekly_tasks_completed,
                average_rating: own.performance.average_rating,
            })
            .unwrap_or_default(),
    }
}
