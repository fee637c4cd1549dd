//! Configuration file for levelscope
//!
//! An optional TOML file tweaks the report layout:
//!
//! ```toml
//! [report]
//! level_header = "Level"
//! count_header = "Count"
//! level_width = 16
//! no_data = "No data"
//! separator = " - "
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use levelscope_report::ReportStyle;

use crate::error::InputError;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub report: ReportStyle,
}

impl Config {
    /// Load config from `path`, or defaults when no path was given
    pub fn load(path: Option<&Path>) -> Result<Self, InputError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path).map_err(|source| InputError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content).map_err(|source| InputError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_no_path_gives_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.report, ReportStyle::default());
    }

    #[test]
    fn test_parse_report_table() {
        let config = Config::parse(
            r#"
            [report]
            level_header = "Рівень логування"
            count_header = "Кількість"
            no_data = "Немає даних"
            "#,
        )
        .unwrap();

        assert_eq!(config.report.level_header, "Рівень логування");
        assert_eq!(config.report.no_data, "Немає даних");
        assert_eq!(config.report.level_width, 16);
    }

    #[test]
    fn test_empty_file_is_valid() {
        assert_eq!(Config::parse("").unwrap().report, ReportStyle::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[report]\nlevel_width = 10").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.report.level_width, 10);
    }

    #[test]
    fn test_load_errors() {
        let missing = Config::load(Some(Path::new("/definitely/not/here.toml")));
        assert!(matches!(missing, Err(InputError::ConfigRead { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[reports]\nlevel_width = 10").unwrap();
        let invalid = Config::load(Some(file.path()));
        assert!(matches!(invalid, Err(InputError::Config { .. })));
    }
}
