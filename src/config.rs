use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::engine::{DisplayOptions, PageOptions, TabRunConfig, Timing};
use crate::error::PasteError;
use crate::listener::TriggerKey;
use crate::table::PreviewOptions;
use crate::utils::paths::get_config_path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_trigger_key")]
    pub trigger_key: String,

    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub tab: TabConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    #[serde(default = "default_key_press_delay_ms")]
    pub key_press_delay_ms: u64,

    #[serde(default = "default_tab_press_delay_ms")]
    pub tab_press_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default = "default_refresh_ratio")]
    pub refresh_ratio: f64,

    #[serde(default = "default_front_len")]
    pub front_len: usize,

    #[serde(default = "default_back_len")]
    pub back_len: usize,

    #[serde(default = "default_preview_limit")]
    pub preview_rows: usize,

    #[serde(default = "default_preview_limit")]
    pub preview_cols: usize,
}

/// Defaults offered by the tab-mode prompts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabConfig {
    #[serde(default = "default_tab_count")]
    pub tab_count: u32,

    #[serde(default)]
    pub clear_field_first: bool,
}

fn default_trigger_key() -> String {
    "F9".to_string()
}

fn default_key_press_delay_ms() -> u64 {
    100
}

fn default_tab_press_delay_ms() -> u64 {
    200
}

fn default_page_size() -> usize {
    20
}

fn default_refresh_ratio() -> f64 {
    0.75
}

fn default_front_len() -> usize {
    20
}

fn default_back_len() -> usize {
    10
}

fn default_preview_limit() -> usize {
    10
}

fn default_tab_count() -> u32 {
    1
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            key_press_delay_ms: default_key_press_delay_ms(),
            tab_press_delay_ms: default_tab_press_delay_ms(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            refresh_ratio: default_refresh_ratio(),
            front_len: default_front_len(),
            back_len: default_back_len(),
            preview_rows: default_preview_limit(),
            preview_cols: default_preview_limit(),
        }
    }
}

impl Default for TabConfig {
    fn default() -> Self {
        Self {
            tab_count: default_tab_count(),
            clear_field_first: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trigger_key: default_trigger_key(),
            timing: TimingConfig::default(),
            display: DisplayConfig::default(),
            tab: TabConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PasteError> {
        self.trigger()?;
        if self.display.page_size == 0 {
            return Err(PasteError::InvalidConfiguration(
                "display.page_size must be at least 1".to_string(),
            ));
        }
        if !(self.display.refresh_ratio > 0.0 && self.display.refresh_ratio <= 1.0) {
            return Err(PasteError::InvalidConfiguration(format!(
                "display.refresh_ratio must be in (0, 1], got {}",
                self.display.refresh_ratio
            )));
        }
        if self.display.preview_rows == 0 || self.display.preview_cols == 0 {
            return Err(PasteError::InvalidConfiguration(
                "display.preview_rows and display.preview_cols must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn trigger(&self) -> Result<TriggerKey, PasteError> {
        self.trigger_key
            .parse()
            .map_err(PasteError::InvalidConfiguration)
    }

    pub fn timing(&self) -> Timing {
        Timing {
            key_press_delay: Duration::from_millis(self.timing.key_press_delay_ms),
            tab_press_delay: Duration::from_millis(self.timing.tab_press_delay_ms),
        }
    }

    pub fn page_options(&self) -> PageOptions {
        PageOptions {
            size: self.display.page_size,
            refresh_ratio: self.display.refresh_ratio,
        }
    }

    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            front_len: self.display.front_len,
            back_len: self.display.back_len,
        }
    }

    pub fn preview_options(&self) -> PreviewOptions {
        PreviewOptions {
            max_rows: self.display.preview_rows,
            max_cols: self.display.preview_cols,
            ..PreviewOptions::default()
        }
    }

    pub fn tab_defaults(&self) -> TabRunConfig {
        TabRunConfig {
            clear_field_first: self.tab.clear_field_first,
            tab_count: self.tab.tab_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.trigger_key, "F9");
        assert_eq!(config.timing().key_press_delay, Duration::from_millis(100));
        assert_eq!(config.page_options().refresh_threshold(), 15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("trigger_key"));
        assert!(toml_str.contains("[timing]"));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let toml_str = r#"
        trigger_key = "F8"

        [display]
        page_size = 30
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.trigger().unwrap().to_string(), "F8");
        assert_eq!(config.display.page_size, 30);
        assert_eq!(config.display.refresh_ratio, 0.75);
        assert_eq!(config.tab.tab_count, 1);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = Config::default();
        config.trigger_key = "Hyper".to_string();
        assert!(matches!(config.validate(), Err(PasteError::InvalidConfiguration(_))));

        let mut config = Config::default();
        config.display.page_size = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.display.refresh_ratio = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.trigger_key, "F9");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[timing]\nkey_press_delay_ms = 50\n\n[tab]\ntab_count = 3").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.timing().key_press_delay, Duration::from_millis(50));
        assert_eq!(config.tab_defaults().tab_count, 3);
    }

    #[test]
    fn test_load_rejects_bad_trigger() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "trigger_key = \"nope\"").unwrap();
        assert!(Config::load_from(file.path()).is_err());
    }
}
