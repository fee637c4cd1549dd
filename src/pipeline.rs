use std::io::{self, Write};

use tracing::info;

use levelscope_logs::{LevelFilter, LogStore, summarize, summarize_and_filter};
use levelscope_report::Reporter;

/// Printed after the summary when no line could be parsed
pub const NO_LOGS_FOUND: &str = "No logs found in the file.";

/// How a report run ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Reported,
    NoLogs,
}

/// Write the level summary and, if a level was requested, its detail listing
pub fn write_report<W: Write>(
    out: &mut W,
    store: &LogStore,
    level: Option<&str>,
    reporter: &Reporter,
) -> io::Result<Outcome> {
    let Some(level) = level else {
        reporter.write_summary(out, &summarize(store))?;
        return finish(out, store);
    };

    let filter = LevelFilter::new(level);
    let (summary, records) = summarize_and_filter(store, filter.level());
    info!(
        level = filter.level(),
        matched = records.len(),
        "filtered log records"
    );

    reporter.write_summary(out, &summary)?;
    if store.is_empty() {
        return finish(out, store);
    }

    writeln!(out)?;
    writeln!(out, "Log details for level '{}':", filter.level())?;
    reporter.write_detail(out, records)?;

    Ok(Outcome::Reported)
}

fn finish<W: Write>(out: &mut W, store: &LogStore) -> io::Result<Outcome> {
    if store.is_empty() {
        writeln!(out, "{NO_LOGS_FOUND}")?;
        return Ok(Outcome::NoLogs);
    }
    Ok(Outcome::Reported)
}
