use levelscope_types::LogRecord;

use crate::store::LogStore;

/// Filter selecting records of a single level
///
/// The requested level is normalized to uppercase once; records are then
/// compared against it ignoring ASCII case.
///
/// Record levels are matched ignoring case too, so a record logged as `info`
/// is selected by `INFO`, while the summary still counts it under `info`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelFilter {
    level: String,
}

impl LevelFilter {
    /// Create a new filter for the given level token
    pub fn new(level: &str) -> Self {
        Self {
            level: level.trim().to_uppercase(),
        }
    }

    /// Check if a log record matches this filter
    pub fn matches(&self, record: &LogRecord) -> bool {
        record.level().eq_ignore_ascii_case(&self.level)
    }

    /// Get the normalized level
    pub fn level(&self) -> &str {
        &self.level
    }

    /// Apply the filter, keeping store order
    pub fn apply<'a>(&self, store: &'a LogStore) -> Vec<&'a LogRecord> {
        store.filtered(|r| self.matches(r))
    }
}

/// Select the records of `store` whose level equals `level` ignoring case
///
/// An empty result is a normal outcome, not an error.
pub fn by_level<'a>(store: &'a LogStore, level: &str) -> Vec<&'a LogRecord> {
    LevelFilter::new(level).apply(store)
}
