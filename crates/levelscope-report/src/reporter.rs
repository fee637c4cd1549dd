use std::io::{self, Write};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use levelscope_types::{LevelSummary, LogRecord};

use crate::style::ReportStyle;

/// Renders summaries and detail listings as plain text
#[derive(Clone, Debug, Default)]
pub struct Reporter {
    style: ReportStyle,
}

impl Reporter {
    pub fn new(style: ReportStyle) -> Self {
        Self { style }
    }

    /// Render the level/count table
    ///
    /// Rows follow the summary's iteration order. An empty summary renders
    /// the header followed by the no-data line.
    pub fn render_summary(&self, summary: &LevelSummary) -> String {
        let width = self.style.column_width();
        let header = format!(
            "{} | {}",
            fit_column(&self.style.level_header, width),
            self.style.count_header
        );

        let mut out = String::new();
        out.push_str(&header);
        out.push('\n');
        out.push_str(&"-".repeat(header.width()));
        out.push('\n');

        if summary.is_empty() {
            out.push_str(&self.style.no_data);
            out.push('\n');
            return out;
        }

        for (level, count) in summary.iter() {
            out.push_str(&format!("{} | {}\n", fit_column(level, width), count));
        }

        out
    }

    /// Render one `timestamp<separator>message` line per record
    ///
    /// The level is left out since every record shares the requested one.
    pub fn render_detail<'a, I>(&self, records: I) -> String
    where
        I: IntoIterator<Item = &'a LogRecord>,
    {
        let mut out = String::new();

        for record in records {
            out.push_str(record.timestamp());
            out.push_str(&self.style.separator);
            out.push_str(record.message());
            out.push('\n');
        }

        if out.is_empty() {
            out.push_str(&self.style.no_data);
            out.push('\n');
        }

        out
    }

    /// Render the summary into a sink
    pub fn write_summary<W: Write>(&self, sink: &mut W, summary: &LevelSummary) -> io::Result<()> {
        sink.write_all(self.render_summary(summary).as_bytes())
    }

    /// Render the detail listing into a sink
    pub fn write_detail<'a, W, I>(&self, sink: &mut W, records: I) -> io::Result<()>
    where
        W: Write,
        I: IntoIterator<Item = &'a LogRecord>,
    {
        sink.write_all(self.render_detail(records).as_bytes())
    }
}

/// Pad or truncate `text` to exactly `width` display columns
fn fit_column(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;

    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }

    out.extend(std::iter::repeat_n(' ', width - used));
    out
}
