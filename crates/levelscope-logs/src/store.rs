use std::slice;

use tracing::debug;

use levelscope_types::LogRecord;

use crate::parser::LineParser;

/// Parsed records of one input, in file line order
///
/// Built once and read-only afterwards. Duplicates and out-of-order
/// timestamps are kept as they appear.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogStore {
    records: Vec<LogRecord>,
}

impl LogStore {
    /// Parse every line, keeping order and dropping malformed lines
    pub fn build<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut records = Vec::new();
        let mut dropped = 0usize;

        for (idx, line) in lines.into_iter().enumerate() {
            match LineParser::parse(line.as_ref()) {
                Some(record) => records.push(record),
                None => {
                    dropped += 1;
                    debug!(line_number = idx + 1, "skipping malformed log line");
                }
            }
        }

        debug!(parsed = records.len(), dropped, "log store built");
        Self { records }
    }

    /// Split text on line boundaries and build from the lines
    pub fn from_text(text: &str) -> Self {
        Self::build(text.lines())
    }

    pub fn iter(&self) -> slice::Iter<'_, LogRecord> {
        self.records.iter()
    }

    pub fn get(&self, index: usize) -> Option<&LogRecord> {
        self.records.get(index)
    }

    /// Get records matching a predicate, in store order
    pub fn filtered<F>(&self, predicate: F) -> Vec<&LogRecord>
    where
        F: Fn(&LogRecord) -> bool,
    {
        self.records.iter().filter(|r| predicate(r)).collect()
    }

    /// Total record count
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no line produced a record
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a LogStore {
    type Item = &'a LogRecord;
    type IntoIter = slice::Iter<'a, LogRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<LogRecord> for LogStore {
    fn from_iter<T: IntoIterator<Item = LogRecord>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
