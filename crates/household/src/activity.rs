//! Capped, newest-first activity log.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pantry_core::{ActivityId, Entity};

/// Kind of user action an entry describes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityAction {
    Create,
    Update,
    Delete,
    Consume,
    Restock,
    Purchase,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: ActivityId,
    pub action: ActivityAction,
    pub message: String,
    /// Short annotation, e.g. `-1 un` or a store name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub is_read: bool,
}

impl Entity for ActivityEntry {
    type Id = ActivityId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Fixed-capacity log. The front is the newest entry; pushing beyond capacity
/// drops from the back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
    capacity: usize,
    recorded: u64,
}

impl ActivityLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            recorded: 0,
        }
    }

    /// Rebuild from stored entries in any order: newest first, capped.
    ///
    /// The counter resumes past `recorded`, the stored entry count and the
    /// highest `{parent}:{seq}` sequence among the entry ids, whichever is
    /// largest, so ids minted afterwards never repeat.
    pub fn from_entries(
        capacity: usize,
        recorded: u64,
        entries: impl IntoIterator<Item = ActivityEntry>,
    ) -> Self {
        let mut entries: Vec<ActivityEntry> = entries.into_iter().collect();
        let highest_seq = entries.iter().filter_map(|e| sequence_of(&e.id)).max();
        let recorded = recorded
            .max(entries.len() as u64)
            .max(highest_seq.unwrap_or(0));

        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        entries.truncate(capacity);

        Self {
            entries: entries.into(),
            capacity,
            recorded,
        }
    }

    /// Entries ever pushed, including ones since dropped or cleared.
    pub fn total_recorded(&self) -> u64 {
        self.recorded
    }

    pub fn push(&mut self, entry: ActivityEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
        self.recorded += 1;
    }

    pub fn mark_all_read(&mut self) {
        for entry in &mut self.entries {
            entry.is_read = true;
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_read).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&ActivityEntry> {
        self.entries.front()
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.entries.iter()
    }
}

/// Trailing sequence number of a derived id (`home:12` -> 12).
fn sequence_of(id: &ActivityId) -> Option<u64> {
    let (_, seq) = id.as_str().rsplit_once(':')?;
    seq.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn entry(n: u32, is_read: bool) -> ActivityEntry {
        ActivityEntry {
            id: ActivityId::parse(format!("log-{n}")).unwrap(),
            action: ActivityAction::Create,
            message: format!("entry {n}"),
            details: None,
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap()
                + Duration::seconds(n as i64),
            is_read,
        }
    }

    #[test]
    fn keeps_newest_first_and_caps() {
        let mut log = ActivityLog::new(50);
        for n in 0..60 {
            log.push(entry(n, false));
        }

        assert_eq!(log.len(), 50);
        assert_eq!(log.total_recorded(), 60);
        assert_eq!(log.latest().unwrap().message, "entry 59");
        assert_eq!(log.iter().last().unwrap().message, "entry 10");
    }

    #[test]
    fn batch_mark_read() {
        let mut log = ActivityLog::new(10);
        log.push(entry(1, false));
        log.push(entry(2, true));
        log.push(entry(3, false));
        assert_eq!(log.unread_count(), 2);

        log.mark_all_read();
        assert_eq!(log.unread_count(), 0);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn from_entries_sorts_and_truncates() {
        let log = ActivityLog::from_entries(2, 0, vec![entry(1, true), entry(3, false), entry(2, false)]);
        let messages: Vec<&str> = log.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["entry 3", "entry 2"]);
    }

    #[test]
    fn from_entries_resumes_counter_past_stored_ids() {
        let mut stored = entry(1, false);
        stored.id = ActivityId::parse("home:60").unwrap();
        let mut older = entry(0, true);
        older.id = ActivityId::parse("home:11").unwrap();

        let log = ActivityLog::from_entries(50, 0, vec![stored, older]);
        assert_eq!(log.total_recorded(), 60);

        let log = ActivityLog::from_entries(50, 75, vec![entry(1, false)]);
        assert_eq!(log.total_recorded(), 75);

        let log = ActivityLog::from_entries(50, 0, vec![entry(1, false), entry(2, false)]);
        assert_eq!(log.total_recorded(), 2);
    }

    #[test]
    fn clear_empties_but_keeps_counter() {
        let mut log = ActivityLog::new(5);
        log.push(entry(1, false));
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.total_recorded(), 1);
    }

    #[test]
    fn details_are_optional_on_the_wire() {
        let json = r#"{"id":"1","action":"restock","message":"Estoque inicial","timestamp":"2024-05-01T08:00:00Z"}"#;
        let parsed: ActivityEntry = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.action, ActivityAction::Restock);
        assert!(parsed.details.is_none());
        assert!(!parsed.is_read);
    }
}
