//! Default catalog compiled into the binary.

use include_dir::{Dir, include_dir};
use tracing::debug;

use crate::domain::{AppError, Catalog, parse_catalog};

/// Embedded catalog directory.
static CATALOG_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/catalog");

const DEFAULT_CATALOG_FILE: &str = "default.toml";

/// Loader for the built-in cards and search templates.
pub struct EmbeddedCatalog;

impl EmbeddedCatalog {
    /// Parse and validate the embedded default catalog.
    pub fn load() -> Result<Catalog, AppError> {
        let file = CATALOG_DIR.get_file(DEFAULT_CATALOG_FILE).ok_or_else(|| {
            AppError::InternalError(format!("embedded {} is missing", DEFAULT_CATALOG_FILE))
        })?;
        let content = file.contents_utf8().ok_or_else(|| {
            AppError::InternalError(format!("embedded {} is not valid UTF-8", DEFAULT_CATALOG_FILE))
        })?;

        let document = parse_catalog(DEFAULT_CATALOG_FILE, content)?;
        debug!(templates = document.templates.len(), "loaded embedded catalog");
        Ok(Catalog::from_document(document)?)
    }
}
