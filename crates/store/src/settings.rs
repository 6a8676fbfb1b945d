//! Export settings management
//!
//! This module provides persistence for the transcript export settings:
//! page geometry, typography, and where artifacts are written. The theme
//! is chosen per export and is not stored here.

use crate::Result;
use layout_engine::{PageMargins, PageSize};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the settings file inside the app data directory
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Export settings container
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExportSettings {
    /// Page geometry and typography
    pub layout: LayoutSettings,
    /// Output location and default labels
    pub output: OutputSettings,
}

/// Page geometry and typography of a rendered transcript, in points
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutSettings {
    pub page_size: PageSize,
    pub margins: PageMargins,
    /// Advance per wrapped body line
    pub line_height: f32,
    pub title_size: f32,
    /// Size of the metadata line, sender labels, and body text
    pub body_size: f32,
    pub footer_size: f32,
    /// Advance after the title
    pub title_gap: f32,
    /// Advance after the metadata line
    pub metadata_gap: f32,
    /// Advance after the header rule
    pub header_rule_gap: f32,
    /// Advance after a sender label
    pub label_gap: f32,
    /// Left indent of message bodies
    pub body_indent: f32,
    /// Space between messages; the separator sits in its middle
    pub message_gap: f32,
    /// Distance of the footer baseline from the bottom edge
    pub footer_offset: f32,
    pub rule_width: f32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            margins: PageMargins::uniform(40.0),
            line_height: 14.0,
            title_size: 18.0,
            body_size: 11.0,
            footer_size: 10.0,
            title_gap: 25.0,
            metadata_gap: 20.0,
            header_rule_gap: 20.0,
            label_gap: 16.0,
            body_indent: 20.0,
            message_gap: 20.0,
            footer_offset: 30.0,
            rule_width: 0.5,
        }
    }
}

/// Where artifacts go and the labels used when none are given
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory exported files are written to
    pub directory: PathBuf,
    /// User label when the caller supplies none
    pub default_user_name: String,
    /// Assistant label when the caller supplies none
    pub default_assistant_name: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            default_user_name: "User".to_string(),
            default_assistant_name: "AI Assistant".to_string(),
        }
    }
}

/// Settings manager for loading, saving, and updating export settings
pub struct SettingsManager {
    /// Path to the settings file
    settings_path: PathBuf,
    /// Current settings (cached)
    current: ExportSettings,
}

impl SettingsManager {
    /// Create a settings manager for `settings.json` in the app data directory
    pub fn new(app_data_dir: PathBuf) -> Self {
        Self::with_path(app_data_dir.join(SETTINGS_FILE_NAME))
    }

    /// Create a settings manager for an explicit settings file
    pub fn with_path(settings_path: impl Into<PathBuf>) -> Self {
        Self {
            settings_path: settings_path.into(),
            current: ExportSettings::default(),
        }
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Load settings from disk, or return defaults if the file doesn't exist
    pub async fn load(&mut self) -> Result<&ExportSettings> {
        self.current = if tokio::fs::try_exists(&self.settings_path).await? {
            let content = tokio::fs::read_to_string(&self.settings_path).await?;
            parse_or_default(&content)
        } else {
            ExportSettings::default()
        };
        Ok(&self.current)
    }

    /// Load settings synchronously
    pub fn load_sync(&mut self) -> Result<&ExportSettings> {
        self.current = if self.settings_path.exists() {
            let content = std::fs::read_to_string(&self.settings_path)?;
            parse_or_default(&content)
        } else {
            ExportSettings::default()
        };
        Ok(&self.current)
    }

    /// Save current settings to disk
    pub async fn save(&self) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(&self.current)?;
        crate::write_atomic_async(&self.settings_path, content.as_bytes()).await
    }

    /// Save settings synchronously
    pub fn save_sync(&self) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.current)?;
        crate::write_atomic(&self.settings_path, content.as_bytes())
    }

    pub fn get(&self) -> &ExportSettings {
        &self.current
    }

    /// Update settings and save to disk
    pub async fn update(&mut self, settings: ExportSettings) -> Result<()> {
        self.current = settings;
        self.save().await
    }

    /// Update settings synchronously
    pub fn update_sync(&mut self, settings: ExportSettings) -> Result<()> {
        self.current = settings;
        self.save_sync()
    }

    /// Reset settings to defaults and save
    pub fn reset_sync(&mut self) -> Result<&ExportSettings> {
        self.current = ExportSettings::default();
        self.save_sync()?;
        Ok(&self.current)
    }
}

fn parse_or_default(content: &str) -> ExportSettings {
    serde_json::from_str(content).unwrap_or_else(|e| {
        tracing::warn!("Failed to parse settings file, using defaults: {}", e);
        ExportSettings::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = ExportSettings::default();

        assert_eq!(settings.layout.page_size, PageSize::A4);
        assert_eq!(settings.layout.margins, PageMargins::uniform(40.0));
        assert_eq!(settings.layout.line_height, 14.0);
        assert_eq!(settings.layout.body_indent, 20.0);
        assert_eq!(settings.output.default_assistant_name, "AI Assistant");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: ExportSettings =
            serde_json::from_str(r#"{"layout":{"line_height":16}}"#).unwrap();
        assert_eq!(settings.layout.line_height, 16.0);
        assert_eq!(settings.layout.title_size, 18.0);
        assert_eq!(settings.output, OutputSettings::default());
    }

    #[test]
    fn test_settings_manager_load_save_sync() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = SettingsManager::new(temp_dir.path().to_path_buf());

        // Load should return defaults when no file exists
        let settings = manager.load_sync().unwrap();
        assert_eq!(settings, &ExportSettings::default());

        let mut new_settings = ExportSettings::default();
        new_settings.layout.page_size = PageSize::Letter;
        new_settings.output.directory = PathBuf::from("/tmp/exports");
        manager.update_sync(new_settings).unwrap();

        let mut manager2 = SettingsManager::new(temp_dir.path().to_path_buf());
        let loaded = manager2.load_sync().unwrap();
        assert_eq!(loaded.layout.page_size, PageSize::Letter);
        assert_eq!(loaded.output.directory, PathBuf::from("/tmp/exports"));
    }

    #[test]
    fn test_unparsable_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut manager = SettingsManager::with_path(&path);
        assert_eq!(manager.load_sync().unwrap(), &ExportSettings::default());
    }

    #[test]
    fn test_settings_manager_reset_sync() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = SettingsManager::new(temp_dir.path().to_path_buf());

        let mut new_settings = ExportSettings::default();
        new_settings.layout.line_height = 20.0;
        manager.update_sync(new_settings).unwrap();

        let settings = manager.reset_sync().unwrap();
        assert_eq!(settings.layout.line_height, 14.0);
    }

    #[tokio::test]
    async fn test_settings_manager_async() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = SettingsManager::new(temp_dir.path().join("nested"));

        manager.load().await.unwrap();

        let mut new_settings = ExportSettings::default();
        new_settings.output.default_user_name = "Ada".to_string();
        manager.update(new_settings).await.unwrap();

        let mut manager2 = SettingsManager::new(temp_dir.path().join("nested"));
        let loaded = manager2.load().await.unwrap();
        assert_eq!(loaded.output.default_user_name, "Ada");
    }
}
