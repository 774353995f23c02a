use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ListSettings {
    pub list: ListSection,
    pub search: SearchSection,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ListSection {
    /// Rows per page when a list opens
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    /// Label of the "no restriction" entry in column dropdowns
    pub all_label: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SearchSection {
    /// Shorter search input (after trimming) is treated as empty
    pub min_chars: usize,
}

impl Default for ListSection {
    fn default() -> Self {
        Self {
            page_size: 50,
            page_size_options: vec![25, 50, 100, 200],
            all_label: "ทั้งหมด".to_string(),
        }
    }
}

impl Default for SearchSection {
    fn default() -> Self {
        Self { min_chars: 1 }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to parse list settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid list settings: {0}")]
    Invalid(String),
}

/// Default configuration embedded in the binary
const DEFAULT_SETTINGS: &str = r#"
[list]
page_size = 50
page_size_options = [25, 50, 100, 200]
all_label = "ทั้งหมด"

[search]
min_chars = 1
"#;

impl ListSettings {
    /// Parse and validate settings. Missing keys fall back to defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, SettingsError> {
        let settings: ListSettings = toml::from_str(contents)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.list.page_size_options.is_empty() {
            return Err(SettingsError::Invalid(
                "page_size_options must not be empty".into(),
            ));
        }
        if self.list.page_size_options.contains(&0) {
            return Err(SettingsError::Invalid(
                "page_size_options must not contain 0".into(),
            ));
        }
        if self.list.page_size == 0 {
            return Err(SettingsError::Invalid("page_size must be positive".into()));
        }
        if !self.list.page_size_options.contains(&self.list.page_size) {
            return Err(SettingsError::Invalid(format!(
                "page_size {} is not one of page_size_options {:?}",
                self.list.page_size, self.list.page_size_options
            )));
        }
        Ok(())
    }
}

/// Load list settings from a TOML file
///
/// Search order:
/// 1. The given path, if it exists
/// 2. Falls back to embedded default settings
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<ListSettings> {
    if let Some(path) = path {
        if path.exists() {
            log::info!("Loading list settings from: {}", path.display());
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let settings = ListSettings::from_toml_str(&contents)
                .with_context(|| format!("parsing {}", path.display()))?;
            return Ok(settings);
        }
        log::warn!("List settings not found at: {}", path.display());
    }

    log::info!("Using default embedded list settings");
    Ok(ListSettings::from_toml_str(DEFAULT_SETTINGS)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_settings_load() {
        let settings = ListSettings::from_toml_str(DEFAULT_SETTINGS).unwrap();
        assert_eq!(settings, ListSettings::default());
        assert_eq!(settings.list.all_label, "ทั้งหมด");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = ListSettings::from_toml_str("[search]\nmin_chars = 3\n").unwrap();
        assert_eq!(settings.search.min_chars, 3);
        assert_eq!(settings.list.page_size, 50);
    }

    #[test]
    fn test_page_size_must_be_an_option() {
        let err = ListSettings::from_toml_str("[list]\npage_size = 30\n").unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = ListSettings::from_toml_str("[list\npage_size = 50").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[list]\npage_size = 10\npage_size_options = [10, 20]\nall_label = \"All\""
        )
        .unwrap();

        let settings = load_settings(Some(file.path())).unwrap();
        assert_eq!(settings.list.page_size, 10);
        assert_eq!(settings.list.all_label, "All");
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("absent.toml");
        let settings = load_settings(Some(absent.as_path())).unwrap();
        assert_eq!(settings, ListSettings::default());
        assert_eq!(load_settings(None).unwrap(), ListSettings::default());
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[list]\npage_size = 0").unwrap();
        let err = load_settings(Some(file.path())).unwrap_err();
        assert!(format!("{:#}", err).contains("parsing"));
    }
}
