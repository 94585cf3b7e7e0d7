//! Append-only record of store mutations.
//!
//! Every successful create or status change lands here so a host can
//! surface an activity feed or notifications. In-memory only, like the
//! rest of the store.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::types::{EventId, WriterId};

/// One recorded mutation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// Event identifier
    pub event_id: EventId,
    /// When the mutation happened
    pub timestamp: DateTime<Utc>,
    /// Account that performed it
    pub actor: WriterId,
    /// Operation name, e.g. `"create_task"`
    pub action: String,
    /// Human-readable summary of what changed
    pub detail: String,
}

/// In-memory mutation log
#[derive(Debug, Default)]
pub struct ChangeLog {
    inner: Mutex<Vec<ChangeEvent>>,
}

impl ChangeLog {
    /// Record a mutation
    pub fn append(&self, actor: WriterId, action: &str, detail: String) -> EventId {
        let event = ChangeEvent {
            event_id: EventId::new(),
            timestamp: Utc::now(),
            actor,
            action: action.to_string(),
            detail,
        };
        let id = event.event_id;
        self.inner.lock().push(event);
        id
    }

    /// Every event, oldest first
    #[must_use]
    pub fn events(&self) -> Vec<ChangeEvent> {
        self.inner.lock().clone()
    }

    /// The latest `n` events, oldest of those first
    #[must_use]
    pub fn recent(&self, n: usize) -> Vec<ChangeEvent> {
        let guard = self.inner.lock();
        let skip = guard.len().saturating_sub(n);
        guard[skip..].to_vec()
    }

    /// Number of recorded events
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether nothing has been recorded yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_preserves_order() {
        let log = ChangeLog::default();
        let actor = WriterId::new();
        log.append(actor, "create_task", "first".to_string());
        log.append(actor, "set_task_status", "second".to_string());

        let events = log.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].detail, "first");
        assert_eq!(events[1].detail, "second");
        assert!(events[0].timestamp <= events[1].timestamp);
    }

    #[test]
    fn recent_returns_the_tail() {
        let log = ChangeLog::default();
        let actor = WriterId::new();
        for i in 0..5 {
            log.append(actor, "set_task_status", format!("event {i}"));
        }

        let tail = log.recent(2);
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[0].detail, "event 3");
        assert_eq!(tail[1].detail, "event 4");
    }

    #[test]
    fn recent_handles_short_logs() {
        let log = ChangeLog::default();
        assert!(log.recent(10).is_empty());
        assert!(log.is_empty());

        log.append(WriterId::new(), "create_writer", "only".to_string());
        assert_eq!(log.recent(10).len(), 1);
        assert_eq!(log.len(), 1);
    }
}
