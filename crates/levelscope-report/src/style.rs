use serde::Deserialize;

/// Text layout settings for reports
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportStyle {
    /// Heading of the level column
    pub level_header: String,

    /// Heading of the count column
    pub count_header: String,

    /// Display width of the level column
    pub level_width: usize,

    /// Line shown in place of an empty section
    pub no_data: String,

    /// Placed between timestamp and message in detail rows
    pub separator: String,
}

impl ReportStyle {
    /// Level column width, never below one column
    pub fn column_width(&self) -> usize {
        self.level_width.max(1)
    }
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            level_header: "Level".to_string(),
            count_header: "Count".to_string(),
            level_width: 16,
            no_data: "No data".to_string(),
            separator: " - ".to_string(),
        }
    }
}
