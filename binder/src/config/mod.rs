// Binder configuration: format settings plus the numeric fields on the page
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shared::FormatSettings;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub version: String,
    #[serde(default)]
    pub format: FormatSettings,
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub id: String,
    /// Element that receives the spelled-out value.
    #[serde(default)]
    pub output_target: Option<String>,
}

impl AppConfig {
    pub fn load_default() -> Result<Self> {
        let config_str = include_str!("../../assets/config/default.json");
        Self::from_json(config_str).context("embedded default config is invalid")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(json).context("failed to parse binder config")?;
        // same rules the engine applies to its own settings file
        config.format.validate().context("invalid format settings in binder config")?;
        Ok(config)
    }

    pub fn field(&self, id: &str) -> Option<&FieldConfig> {
        self.fields.iter().find(|f| f.id == id)
    }
}
