use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::models::settings::PickerSettings;

const SETTINGS_FILE: &str = "picker.toml";

/// Loads and stores [`PickerSettings`] as a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service bound to the platform config directory, if one can be resolved.
    pub fn with_default_path() -> Option<Self> {
        Self::default_path().map(Self::new)
    }

    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "DatePickerEngine", "DatePicker")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read settings; a missing file yields the defaults.
    pub fn load(&self) -> Result<PickerSettings> {
        if !self.path.exists() {
            log::info!("No settings at {}, using defaults", self.path.display());
            return Ok(PickerSettings::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read settings from {}", self.path.display()))?;
        let settings: PickerSettings = toml::from_str(&data)
            .with_context(|| format!("failed to parse settings in {}", self.path.display()))?;
        settings
            .validate()
            .with_context(|| format!("invalid settings in {}", self.path.display()))?;
        Ok(settings)
    }

    /// Like [`load`](Self::load), but logs failures and falls back to defaults.
    pub fn load_or_default(&self) -> PickerSettings {
        self.load().unwrap_or_else(|err| {
            log::warn!("Failed to load picker settings: {:#}", err);
            PickerSettings::default()
        })
    }

    pub fn save(&self, settings: &PickerSettings) -> Result<()> {
        settings.validate().context("refusing to save invalid settings")?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(settings).context("failed to serialize settings")?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write settings to {}", self.path.display()))?;
        Ok(())
    }
}
