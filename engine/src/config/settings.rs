// Engine settings, loaded from a JSON file or left at their defaults
use serde::{Deserialize, Serialize};
use shared::FormatSettings;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::data::batch::BatchOptions;
use crate::error::{EngineError, Result};

/// Environment variable holding the path of the settings file.
pub const CONFIG_ENV_VAR: &str = "PERSIAN_NUM_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub format: FormatSettings,
    pub batch: BatchSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchSettings {
    pub column: String,
    pub transforms: Vec<String>,
    pub delimiter: char,
}

impl Default for BatchSettings {
    fn default() -> Self {
        let options = BatchOptions::default();
        Self {
            column: options.column,
            transforms: options.transforms,
            delimiter: options.delimiter as char,
        }
    }
}

impl BatchSettings {
    pub fn to_options(&self) -> Result<BatchOptions> {
        if !self.delimiter.is_ascii() {
            return Err(EngineError::ConfigError(format!(
                "CSV delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            )));
        }
        Ok(BatchOptions {
            column: self.column.clone(),
            transforms: self.transforms.clone(),
            delimiter: self.delimiter as u8,
        })
    }
}

impl EngineSettings {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            EngineError::ConfigError(format!("Failed to read settings '{}': {}", path.display(), e))
        })?;
        let settings: EngineSettings = serde_json::from_str(&raw)?;
        settings.validate()?;
        debug!("Loaded engine settings from {}", path.display());
        Ok(settings)
    }

    /// Loads the file named by `PERSIAN_NUM_CONFIG`, or returns the defaults when unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::load(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.format
            .validate()
            .map_err(|e| EngineError::ConfigError(format!("invalid format settings: {}", e)))?;
        self.batch.to_options().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_settings(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_load_partial_file() {
        let file = write_settings(r#"{ "format": { "currency_unit": "ریال" }, "batch": { "delimiter": ";" } }"#);
        let settings = EngineSettings::load(file.path()).unwrap();
        assert_eq!(settings.format.currency_unit, "ریال");
        assert_eq!(settings.format.group_separator, '،');
        assert_eq!(settings.batch.to_options().unwrap().delimiter, b';');
        assert_eq!(settings.batch.column, "amount");
    }

    #[test]
    fn test_load_missing_file() {
        let err = EngineSettings::load(Path::new("/nonexistent/persian-num.json")).unwrap_err();
        assert!(matches!(err, EngineError::ConfigError(_)));
    }

    #[test]
    fn test_load_rejects_bad_json() {
        let file = write_settings("{ not json");
        assert!(matches!(
            EngineSettings::load(file.path()),
            Err(EngineError::JsonError { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_clashing_separators() {
        let file = write_settings(r#"{ "format": { "group_separator": ".", "decimal_separator": "." } }"#);
        assert!(matches!(
            EngineSettings::load(file.path()),
            Err(EngineError::ConfigError(_))
        ));
    }

    #[test]
    fn test_validate_rejects_persian_digit_separator() {
        let file = write_settings(r#"{ "format": { "decimal_separator": "۵" } }"#);
        let err = EngineSettings::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("separators cannot be digits"));
    }

    #[test]
    fn test_non_ascii_delimiter() {
        let batch = BatchSettings {
            delimiter: '؛',
            ..BatchSettings::default()
        };
        assert!(batch.to_options().is_err());
    }
}
