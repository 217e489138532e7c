//! Configuration settings for habitual.
//!
//! Settings are loaded from `~/.habitual/config.yaml`; a missing file means
//! defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::Paths;
use crate::error::HabitualError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// General settings.
    pub general: GeneralSettings,
    /// Export settings.
    pub export: ExportSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Color output setting.
    #[serde(default)]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// CSV export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Default export file path.
    #[serde(default = "default_export_path")]
    pub default_path: PathBuf,
}

fn default_export_path() -> PathBuf {
    PathBuf::from("habits_export.csv")
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            color: ColorSetting::Auto,
        }
    }
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            default_path: default_export_path(),
        }
    }
}

impl Settings {
    /// Load settings from the config file, falling back to defaults when
    /// the file is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(paths: &Paths) -> Result<Self, HabitualError> {
        if !paths.config_file.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&paths.config_file).map_err(HabitualError::Io)?;
        serde_yaml::from_str(&content)
            .map_err(|e| HabitualError::Config(format!("Failed to parse config: {e}")))
    }

    /// Apply the color setting to the global colored-output switch.
    pub fn apply_color(&self) {
        match self.general.color {
            ColorSetting::Always => colored::control::set_override(true),
            ColorSetting::Never => colored::control::set_override(false),
            ColorSetting::Auto => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let paths = Paths::with_root(dir.path().to_path_buf());

        let settings = Settings::load(&paths).unwrap();
        assert_eq!(settings.general.color, ColorSetting::Auto);
        assert_eq!(settings.export.default_path, PathBuf::from("habits_export.csv"));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let paths = Paths::with_root(dir.path().to_path_buf());
        std::fs::write(&paths.config_file, "general:\n  color: never\n").unwrap();

        let settings = Settings::load(&paths).unwrap();
        assert_eq!(settings.general.color, ColorSetting::Never);
        assert_eq!(settings.export.default_path, PathBuf::from("habits_export.csv"));
    }

    #[test]
    fn test_bad_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let paths = Paths::with_root(dir.path().to_path_buf());
        std::fs::write(&paths.config_file, "general: [not a map").unwrap();

        assert!(Settings::load(&paths).is_err());
    }
}
