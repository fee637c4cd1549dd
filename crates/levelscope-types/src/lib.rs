//! Shared types for levelscope
//!
//! This crate contains the data model used across the levelscope crates:
//! parsed log records and per-level summaries.

use std::collections::HashMap;

// ============================================================================
// Log Types
// ============================================================================

/// A single parsed log line
///
/// All three fields are populated or the record does not exist. The
/// timestamp is kept verbatim as it appeared in the file.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LogRecord {
    timestamp: String,
    level: String,
    message: String,
}

impl LogRecord {
    pub fn new(
        timestamp: impl Into<String>,
        level: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            level: level.into(),
            message: message.into(),
        }
    }

    /// Timestamp in `YYYY-MM-DD HH:MM:SS` form
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Level token exactly as captured (no case normalization)
    pub fn level(&self) -> &str {
        &self.level
    }

    /// Rest of the line after the level
    pub fn message(&self) -> &str {
        &self.message
    }
}

// ============================================================================
// Summary Types
// ============================================================================

/// Occurrence count per level token
///
/// Iteration order is the order in which each level was first seen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LevelSummary {
    /// Counts in first-occurrence order
    entries: Vec<(String, usize)>,

    /// Level token -> position in `entries`
    index: HashMap<String, usize>,
}

impl LevelSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for `level`, inserting it at the end on first sight
    pub fn increment(&mut self, level: &str) {
        match self.index.get(level) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(level.to_string(), self.entries.len());
                self.entries.push((level.to_string(), 1));
            }
        }
    }

    /// Count for a level, `None` if it was never observed
    pub fn get(&self, level: &str) -> Option<usize> {
        self.index.get(level).map(|&pos| self.entries[pos].1)
    }

    /// Iterate `(level, count)` pairs in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(level, count)| (level.as_str(), *count))
    }

    pub fn levels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(level, _)| level.as_str())
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Number of distinct levels
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accessors() {
        let record = LogRecord::new("2024-01-01 10:00:00", "INFO", "Starting up");
        assert_eq!(record.timestamp(), "2024-01-01 10:00:00");
        assert_eq!(record.level(), "INFO");
        assert_eq!(record.message(), "Starting up");
    }

    #[test]
    fn test_summary_first_occurrence_order() {
        let mut summary = LevelSummary::new();
        for level in ["WARN", "INFO", "WARN", "ERROR", "INFO", "WARN"] {
            summary.increment(level);
        }

        let pairs: Vec<_> = summary.iter().collect();
        assert_eq!(pairs, vec![("WARN", 3), ("INFO", 2), ("ERROR", 1)]);
        assert_eq!(summary.total(), 6);
        assert_eq!(summary.len(), 3);
    }

    #[test]
    fn test_summary_is_case_sensitive() {
        let mut summary = LevelSummary::new();
        summary.increment("INFO");
        summary.increment("info");

        assert_eq!(summary.get("INFO"), Some(1));
        assert_eq!(summary.get("info"), Some(1));
        assert_eq!(summary.get("Info"), None);
    }

    #[test]
    fn test_empty_summary() {
        let summary = LevelSummary::default();
        assert!(summary.is_empty());
        assert_eq!(summary.total(), 0);
        assert_eq!(summary.levels().count(), 0);
    }
}
