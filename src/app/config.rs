//! Application configuration for promptcard.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppError, Catalog};
use crate::services::{EmbeddedCatalog, load_catalog_file};

/// Environment variable naming a catalog file to overlay on the built-in cards.
pub const CATALOG_ENV_VAR: &str = "PROMPTCARD_CATALOG";

const APP_DIR_NAME: &str = "promptcard";
const CATALOG_FILE: &str = "catalog.toml";
const PREFERENCES_FILE: &str = "preferences.toml";

/// Where the user catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Built-in cards only.
    Embedded,
    /// Built-in cards overlaid with a file. An explicitly named file must exist.
    File { path: PathBuf, required: bool },
}

/// Application-wide configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding `catalog.toml` and `preferences.toml`.
    pub config_dir: PathBuf,
    /// Catalog file named by flag or environment.
    pub catalog_path: Option<PathBuf>,
}

impl AppConfig {
    /// Create a configuration rooted at a custom directory.
    pub fn with_dir(config_dir: PathBuf) -> Self {
        Self { config_dir, catalog_path: None }
    }

    /// Create configuration using the HOME-based config directory.
    ///
    /// Uses $HOME/.config/promptcard for consistency across platforms and tests.
    pub fn new_default() -> Result<Self, AppError> {
        let home = std::env::var("HOME")
            .map_err(|_| AppError::config_error("HOME environment variable not set"))?;
        Ok(Self::with_dir(PathBuf::from(home).join(".config").join(APP_DIR_NAME)))
    }

    /// Default configuration with the catalog flag, falling back to `PROMPTCARD_CATALOG`.
    pub fn from_env(catalog_flag: Option<PathBuf>) -> Result<Self, AppError> {
        let catalog_path = catalog_flag.or_else(|| {
            std::env::var_os(CATALOG_ENV_VAR).filter(|v| !v.is_empty()).map(PathBuf::from)
        });
        Ok(Self::new_default()?.with_catalog(catalog_path))
    }

    pub fn with_catalog(mut self, catalog_path: Option<PathBuf>) -> Self {
        self.catalog_path = catalog_path;
        self
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.config_dir.join(PREFERENCES_FILE)
    }

    pub fn default_catalog_path(&self) -> PathBuf {
        self.config_dir.join(CATALOG_FILE)
    }

    pub fn catalog_source(&self) -> CatalogSource {
        if let Some(path) = &self.catalog_path {
            return CatalogSource::File { path: path.clone(), required: true };
        }
        let default_path = self.default_catalog_path();
        if default_path.is_file() {
            CatalogSource::File { path: default_path, required: false }
        } else {
            CatalogSource::Embedded
        }
    }
}

/// Load the built-in catalog and overlay the configured user catalog, if any.
pub fn load_catalog(config: &AppConfig) -> Result<Catalog, AppError> {
    let catalog = EmbeddedCatalog::load()?;
    match config.catalog_source() {
        CatalogSource::Embedded => Ok(catalog),
        CatalogSource::File { path, required } => {
            ensure_catalog_exists(&path, required)?;
            debug!(path = %path.display(), "overlaying user catalog");
            Ok(catalog.merge(load_catalog_file(&path)?))
        }
    }
}

fn ensure_catalog_exists(path: &Path, required: bool) -> Result<(), AppError> {
    if required && !path.is_file() {
        return Err(AppError::config_error(format!("Catalog file not found: {}", path.display())));
    }
    Ok(())
}
