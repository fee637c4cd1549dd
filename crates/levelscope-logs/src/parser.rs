use regex::Regex;
use std::sync::LazyLock;

use levelscope_types::LogRecord;

/// `<YYYY-MM-DD HH:MM:SS> <LEVEL> <MESSAGE>`, anchored at line start
static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2}) ([A-Za-z0-9_]+) (.+)",
    )
    .expect("line pattern is a valid regex")
});

/// Log parser for extracting structure from raw log lines
pub struct LineParser;

impl LineParser {
    /// Parse a raw log line into a LogRecord
    ///
    /// Returns `None` for lines that do not match the fixed layout. Dropping
    /// those lines is the caller's policy; nothing is reported as an error.
    pub fn parse(line: &str) -> Option<LogRecord> {
        let line = Self::strip_line_terminator(line);
        let caps = LINE_PATTERN.captures(line)?;

        Some(LogRecord::new(&caps[1], &caps[2], &caps[3]))
    }

    fn strip_line_terminator(line: &str) -> &str {
        let line = line.strip_suffix('\n').unwrap_or(line);
        line.strip_suffix('\r').unwrap_or(line)
    }
}
