//! A single completed calculation.

use chrono::{DateTime, Local};
use serde::Serialize;
use uuid::Uuid;

/// One row of the calculation history. Immutable once created.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HistoryEntry {
    id: Uuid,
    expression: String,
    result: String,
    timestamp: DateTime<Local>,
}

impl HistoryEntry {
    /// Create an entry stamped with the current time.
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            // v7 ids sort by creation time.
            id: Uuid::now_v7(),
            expression: expression.into(),
            result: result.into(),
            timestamp: Local::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The calculation as typed, e.g. `"7 × 6"`.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// Local time of day the entry was created, `HH:MM:SS`.
    pub fn time_of_day(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_fields() {
        let entry = HistoryEntry::new("7 × 6", "42");
        assert_eq!(entry.expression(), "7 × 6");
        assert_eq!(entry.result(), "42");
        assert_eq!(entry.time_of_day().len(), 8);
    }

    #[test]
    fn test_ids_are_unique_and_ordered() {
        let first = HistoryEntry::new("1 + 1", "2");
        let second = HistoryEntry::new("2 + 2", "4");
        assert_ne!(first.id(), second.id());
        assert!(first.id() < second.id());
        assert!(first.timestamp() <= second.timestamp());
    }
}
