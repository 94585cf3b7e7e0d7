//! Task list filtering.
//!
//! A [`TaskQuery`] narrows a (already role-scoped) task list the way the
//! dashboard's filter panel does: by status, assignee, tag, deadline
//! window and word-count band, all combined conjunctively. The `today`
//! anchor for deadline windows is a parameter, so applying a query is a
//! pure function.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use writeflow_core::{Task, TaskStatus, WriterId};

/// Relative deadline windows offered by the filter panel
///
/// Weeks run Sunday through Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeadlineWindow {
    /// Deadline before today
    Overdue,
    /// Due today
    Today,
    /// Due tomorrow
    Tomorrow,
    /// Due in the current week
    ThisWeek,
    /// Due in the following week
    NextWeek,
    /// Due in the current calendar month
    ThisMonth,
}

impl DeadlineWindow {
    /// Whether `deadline` falls inside the window anchored at `today`
    #[must_use]
    pub fn contains(self, deadline: NaiveDate, today: NaiveDate) -> bool {
        match self {
            DeadlineWindow::Overdue => deadline < today,
            DeadlineWindow::Today => deadline == today,
            DeadlineWindow::Tomorrow => deadline == today + Duration::days(1),
            DeadlineWindow::ThisWeek => {
                let start = week_start(today);
                (start..start + Duration::days(7)).contains(&deadline)
            }
            DeadlineWindow::NextWeek => {
                let start = week_start(today) + Duration::days(7);
                (start..start + Duration::days(7)).contains(&deadline)
            }
            DeadlineWindow::ThisMonth => {
                deadline.year() == today.year() && deadline.month() == today.month()
            }
        }
    }
}

fn week_start(day: NaiveDate) -> NaiveDate {
    day - Duration::days(i64::from(day.weekday().num_days_from_sunday()))
}

/// Word-count bands offered by the filter panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordCountBand {
    /// Up to 500 words
    #[serde(rename = "0-500")]
    UpTo500,
    /// 501 to 1,000 words
    #[serde(rename = "501-1000")]
    To1000,
    /// 1,001 to 2,000 words
    #[serde(rename = "1001-2000")]
    To2000,
    /// 2,001 to 5,000 words
    #[serde(rename = "2001-5000")]
    To5000,
    /// More than 5,000 words
    #[serde(rename = "5000+")]
    Over5000,
}

impl WordCountBand {
    /// Whether `word_count` falls inside the band
    #[must_use]
    pub fn contains(self, word_count: u32) -> bool {
        match self {
            WordCountBand::UpTo500 => word_count <= 500,
            WordCountBand::To1000 => (501..=1000).contains(&word_count),
            WordCountBand::To2000 => (1001..=2000).contains(&word_count),
            WordCountBand::To5000 => (2001..=5000).contains(&word_count),
            WordCountBand::Over5000 => word_count > 5000,
        }
    }
}

/// Conjunctive task-list filter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskQuery {
    /// Keep only this status
    pub status: Option<TaskStatus>,
    /// Keep only tasks assigned to this writer
    pub assignee: Option<WriterId>,
    /// Keep only tasks carrying this tag
    pub tag: Option<String>,
    /// Keep only tasks due inside this window
    pub deadline: Option<DeadlineWindow>,
    /// Keep only tasks in this word-count band
    pub word_count: Option<WordCountBand>,
}

impl TaskQuery {
    /// The empty query; matches everything
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Filter by assignee
    #[inline]
    #[must_use]
    pub fn with_assignee(mut self, assignee: WriterId) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Filter by tag
    #[inline]
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Filter by deadline window
    #[inline]
    #[must_use]
    pub fn with_deadline(mut self, window: DeadlineWindow) -> Self {
        self.deadline = Some(window);
        self
    }

    /// Filter by word-count band
    #[inline]
    #[must_use]
    pub fn with_word_count(mut self, band: WordCountBand) -> Self {
        self.word_count = Some(band);
        self
    }

    /// Number of filters in effect
    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        usize::from(self.status.is_some())
            + usize::from(self.assignee.is_some())
            + usize::from(self.tag.is_some())
            + usize::from(self.deadline.is_some())
            + usize::from(self.word_count.is_some())
    }

    /// Whether no filter is in effect
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active_filter_count() == 0
    }

    /// Apply the query, keeping input order
    ///
    /// A deadline filter excludes tasks without a deadline.
    #[must_use]
    pub fn apply(&self, tasks: &[Task], today: NaiveDate) -> Vec<Task> {
        tasks
            .iter()
            .filter(|task| self.matches(task, today))
            .cloned()
            .collect()
    }

    fn matches(&self, task: &Task, today: NaiveDate) -> bool {
        if let Some(status) = self.status {
            if task.status != status {
                return false;
            }
        }
        if let Some(assignee) = self.assignee {
            if !task.is_assigned_to(assignee) {
                return false;
            }
        }
        if let Some(ref tag) = self.tag {
            if !task.tags.iter().any(|t| t == tag) {
                return false;
            }
        }
        if let Some(window) = self.deadline {
            match task.deadline {
                Some(deadline) if window.contains(deadline, today) => {}
                _ => return false,
            }
        }
        if let Some(band) = self.word_count {
            if !band.contains(task.word_count) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use writeflow_core::TaskId;

    // 2025-03-12 is a Wednesday; its Sunday-start week is Mar 9 - Mar 15.
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 12).unwrap()
    }

    fn task(title: &str, status: TaskStatus, words: u32, deadline: Option<NaiveDate>) -> Task {
        Task {
            id: TaskId::new(),
            title: title.to_string(),
            description: "Text".to_string(),
            word_count: words,
            deadline,
            assigned_to: vec![WriterId::new()],
            status,
            tags: vec!["blog".to_string()],
            created_by: WriterId::new(),
            created_at: Utc::now(),
            submitted_at: None,
            reviewed_at: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_query_keeps_everything_in_order() {
        let tasks = vec![
            task("a", TaskStatus::Pending, 100, None),
            task("b", TaskStatus::Approved, 9000, None),
        ];
        let kept = TaskQuery::new().apply(&tasks, today());
        assert_eq!(kept, tasks);
        assert!(TaskQuery::new().is_empty());
    }

    #[test]
    fn filters_combine_conjunctively() {
        let tasks = vec![
            task("match", TaskStatus::Pending, 400, None),
            task("wrong-status", TaskStatus::Approved, 400, None),
            task("wrong-band", TaskStatus::Pending, 4000, None),
        ];
        let query = TaskQuery::new()
            .with_status(TaskStatus::Pending)
            .with_word_count(WordCountBand::UpTo500);
        assert_eq!(query.active_filter_count(), 2);

        let kept = query.apply(&tasks, today());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title, "match");
    }

    #[test]
    fn tag_filter_matches_exactly() {
        let mut tagged = task("tagged", TaskStatus::Pending, 100, None);
        tagged.tags = vec!["newsletter".to_string(), "email".to_string()];
        let tasks = vec![tagged, task("other", TaskStatus::Pending, 100, None)];

        let kept = TaskQuery::new().with_tag("email").apply(&tasks, today());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title, "tagged");
    }

    #[test]
    fn assignee_filter_uses_membership() {
        let sarah = WriterId::new();
        let mut shared = task("shared", TaskStatus::Pending, 100, None);
        shared.assigned_to.push(sarah);
        let tasks = vec![shared, task("other", TaskStatus::Pending, 100, None)];

        let kept = TaskQuery::new().with_assignee(sarah).apply(&tasks, today());
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn deadline_filter_excludes_undated_tasks() {
        let tasks = vec![
            task("dated", TaskStatus::Pending, 100, Some(date(2025, 3, 12))),
            task("undated", TaskStatus::Pending, 100, None),
        ];

        let kept = TaskQuery::new()
            .with_deadline(DeadlineWindow::Today)
            .apply(&tasks, today());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title, "dated");
    }

    #[test]
    fn deadline_windows_relative_to_today() {
        let today = today();
        assert!(DeadlineWindow::Overdue.contains(date(2025, 3, 11), today));
        assert!(!DeadlineWindow::Overdue.contains(today, today));
        assert!(DeadlineWindow::Today.contains(today, today));
        assert!(DeadlineWindow::Tomorrow.contains(date(2025, 3, 13), today));
        assert!(!DeadlineWindow::Tomorrow.contains(date(2025, 3, 14), today));
    }

    #[test]
    fn week_windows_run_sunday_to_saturday() {
        let today = today();
        assert!(DeadlineWindow::ThisWeek.contains(date(2025, 3, 9), today));
        assert!(DeadlineWindow::ThisWeek.contains(date(2025, 3, 15), today));
        assert!(!DeadlineWindow::ThisWeek.contains(date(2025, 3, 16), today));
        assert!(DeadlineWindow::NextWeek.contains(date(2025, 3, 16), today));
        assert!(DeadlineWindow::NextWeek.contains(date(2025, 3, 22), today));
        assert!(!DeadlineWindow::NextWeek.contains(date(2025, 3, 23), today));
    }

    #[test]
    fn month_window_is_calendar_bound() {
        let today = today();
        assert!(DeadlineWindow::ThisMonth.contains(date(2025, 3, 31), today));
        assert!(!DeadlineWindow::ThisMonth.contains(date(2025, 4, 1), today));
        assert!(!DeadlineWindow::ThisMonth.contains(date(2024, 3, 15), today));
    }

    #[test]
    fn word_count_band_boundaries() {
        assert!(WordCountBand::UpTo500.contains(0));
        assert!(WordCountBand::UpTo500.contains(500));
        assert!(!WordCountBand::UpTo500.contains(501));
        assert!(WordCountBand::To1000.contains(501));
        assert!(WordCountBand::To2000.contains(2000));
        assert!(WordCountBand::To5000.contains(2001));
        assert!(!WordCountBand::Over5000.contains(5000));
        assert!(WordCountBand::Over5000.contains(5001));
    }

    #[test]
    fn band_serde_uses_panel_values() {
        let json = serde_json::to_string(&WordCountBand::Over5000).unwrap();
        assert_eq!(json, "\"5000+\"");
        let json = serde_json::to_string(&DeadlineWindow::ThisWeek).unwrap();
        assert_eq!(json, "\"this-week\"");
    }
}
