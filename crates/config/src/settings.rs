use color_eyre::eyre::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

pub const APP_NAME: &str = "actionbar";
pub const DEFAULT_UPDATE_DELAY_MS: u64 = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Show thumbnails for single selections when one is available.
    #[serde(default = "default_show_thumbnail")]
    pub show_thumbnail: bool,
    /// Quiet period before a burst of view changes is evaluated.
    #[serde(default = "default_update_delay_ms")]
    pub update_delay_ms: u64,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

// Default value functions for serde
fn default_show_thumbnail() -> bool {
    true
}
fn default_update_delay_ms() -> u64 {
    DEFAULT_UPDATE_DELAY_MS
}
fn default_log_filter() -> String {
    "actionbar=debug,info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_thumbnail: default_show_thumbnail(),
            update_delay_ms: default_update_delay_ms(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    #[must_use]
    pub fn update_delay(&self) -> Duration {
        Duration::from_millis(self.update_delay_ms)
    }

    /// Loads settings from the user config directory, falling back to defaults
    /// when no config file exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined or the
    /// file exists but cannot be read or parsed.
    pub async fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?).await
    }

    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load_from(path: &Path) -> Result<Self> {
        if !tokio::fs::try_exists(path).await? {
            debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = tokio::fs::read_to_string(path).await?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined or written.
    pub async fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?).await
    }

    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the file cannot be written.
    pub async fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        tokio::fs::write(path, toml_string).await?;

        info!("Settings saved to {:?}", path);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the platform has no config directory.
    pub fn config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().ok_or_else(|| color_eyre::eyre::eyre!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();

        assert!(settings.show_thumbnail);
        assert_eq!(settings.update_delay_ms, 200);
        assert_eq!(settings.update_delay(), Duration::from_millis(200));
        assert_eq!(settings.log_filter, "actionbar=debug,info");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: Settings = toml::from_str("show_thumbnail = false").unwrap();

        assert!(!settings.show_thumbnail);
        assert_eq!(settings.update_delay_ms, DEFAULT_UPDATE_DELAY_MS);
    }

    #[tokio::test]
    async fn test_load_missing_file_returns_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let settings = Settings::load_from(&temp_dir.path().join("missing.toml")).await?;

        assert_eq!(settings, Settings::default());
        Ok(())
    }

    #[tokio::test]
    async fn test_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("nested").join("config.toml");

        let settings = Settings {
            show_thumbnail: false,
            update_delay_ms: 50,
            log_filter: "actionbar=trace".to_string(),
        };
        settings.save_to(&path).await?;

        let loaded = Settings::load_from(&path).await?;
        assert_eq!(loaded, settings);
        Ok(())
    }

    #[tokio::test]
    async fn test_load_invalid_toml_fails() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        tokio::fs::write(&path, "update_delay_ms = \"soon\"").await?;

        assert!(Settings::load_from(&path).await.is_err());
        Ok(())
    }
}
