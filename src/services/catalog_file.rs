use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::{AppError, CatalogDocument, parse_catalog};

/// Read and validate a user catalog file.
pub fn load_catalog_file(path: &Path) -> Result<CatalogDocument, AppError> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::config_error(format!("Failed to read catalog {}: {}", path.display(), e))
    })?;
    let document = parse_catalog(&path.display().to_string(), &content)?;
    debug!(path = %path.display(), templates = document.templates.len(), "loaded catalog file");
    Ok(document)
}
