use std::thread;

use tracing::debug;

use levelscope_types::{LevelSummary, LogRecord};

use crate::filter::by_level;
use crate::store::LogStore;

/// Count records per level in a single pass
///
/// Levels are compared exactly as captured, so `INFO` and `info` are
/// counted under separate keys. Keys keep first-occurrence order.
pub fn summarize(store: &LogStore) -> LevelSummary {
    let mut summary = LevelSummary::new();

    for record in store {
        summary.increment(record.level());
    }

    debug!(
        records = store.len(),
        levels = summary.len(),
        "summarized log levels"
    );
    summary
}

/// Run the summary and the level filter over the same store on two threads
///
/// Both passes only read the store, so the result is the same as calling
/// [`summarize`] and [`by_level`] one after the other.
pub fn summarize_and_filter<'a>(
    store: &'a LogStore,
    level: &str,
) -> (LevelSummary, Vec<&'a LogRecord>) {
    thread::scope(|s| {
        let filtered = s.spawn(|| by_level(store, level));
        let summary = summarize(store);
        // A panic in the filter thread is re-raised here
        let filtered = filtered
            .join()
            .unwrap_or_else(|payload| std::panic::resume_unwind(payload));
        (summary, filtered)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_scenario_counts_in_first_occurrence_order() {
        let store = LogStore::build([
            "2024-01-01 10:00:00 INFO Starting up",
            "2024-01-01 10:00:05 ERROR Disk full",
            "garbage line",
            "2024-01-01 10:00:09 INFO Shutting down",
        ]);

        let summary = summarize(&store);
        let pairs: Vec<_> = summary.iter().collect();
        assert_eq!(pairs, vec![("INFO", 2), ("ERROR", 1)]);
    }

    #[test]
    fn test_mixed_case_levels_are_distinct_keys() {
        let store = LogStore::build([
            "2024-01-01 10:00:00 info lower",
            "2024-01-01 10:00:01 INFO upper",
            "2024-01-01 10:00:02 info lower again",
        ]);

        let summary = summarize(&store);
        assert_eq!(summary.get("info"), Some(2));
        assert_eq!(summary.get("INFO"), Some(1));
        assert_eq!(summary.levels().collect::<Vec<_>>(), vec!["info", "INFO"]);
    }

    #[test]
    fn test_empty_store_gives_empty_summary() {
        assert!(summarize(&LogStore::default()).is_empty());
    }

    #[test]
    fn test_concurrent_matches_sequential() {
        let store = LogStore::from_text(
            "2024-01-01 10:00:00 WARN a\n\
             2024-01-01 10:00:01 ERROR b\n\
             2024-01-01 10:00:02 warn c\n",
        );

        let (summary, filtered) = summarize_and_filter(&store, "Warn");
        assert_eq!(summary, summarize(&store));
        assert_eq!(filtered, by_level(&store, "Warn"));
        assert_eq!(filtered.len(), 2);
    }

    fn log_line() -> impl Strategy<Value = String> {
        prop_oneof![
            3 => ("(INFO|ERROR|WARN|DEBUG|info)", "[a-z ]{1,20}")
                .prop_map(|(level, msg)| format!("2024-05-06 07:08:09 {level} {msg}")),
            1 => "[a-z0-9 :-]{0,30}",
        ]
    }

    proptest! {
        #[test]
        fn prop_counts_sum_to_record_count(lines in prop::collection::vec(log_line(), 0..50)) {
            let store = LogStore::build(&lines);
            let summary = summarize(&store);

            prop_assert!(store.len() <= lines.len());
            prop_assert_eq!(summary.total(), store.len());
        }

        #[test]
        fn prop_summary_is_stable(lines in prop::collection::vec(log_line(), 0..50)) {
            let store = LogStore::build(&lines);
            let first: Vec<_> = summarize(&store).iter().map(|(l, c)| (l.to_string(), c)).collect();
            let second: Vec<_> = summarize(&store).iter().map(|(l, c)| (l.to_string(), c)).collect();

            prop_assert_eq!(first, second);
        }
    }
}
