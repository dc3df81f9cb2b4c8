use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{AppError, Theme};
use crate::ports::PreferenceStore;

#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferencesFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<Theme>,
}

/// Theme preference persisted as `theme = "dark" | "light"` in a TOML file.
#[derive(Debug, Clone)]
pub struct FilesystemPreferenceStore {
    path: PathBuf,
}

impl FilesystemPreferenceStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<PreferencesFile, AppError> {
        if !self.path.exists() {
            return Ok(PreferencesFile::default());
        }
        let content = fs::read_to_string(&self.path)?;
        toml::from_str(&content).map_err(|e| {
            AppError::Preference(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }
}

impl PreferenceStore for FilesystemPreferenceStore {
    fn load_theme(&self) -> Result<Option<Theme>, AppError> {
        Ok(self.read()?.theme)
    }

    fn save_theme(&self, theme: Theme) -> Result<(), AppError> {
        let preferences = PreferencesFile { theme: Some(theme) };
        let content = toml::to_string(&preferences).map_err(|e| {
            AppError::Preference(format!("Failed to serialize preferences: {}", e))
        })?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, content)?;
        Ok(())
    }
}
