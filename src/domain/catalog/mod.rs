//! The immutable template catalog.

pub mod error;
pub mod parse;

pub use error::CatalogError;
pub use parse::{CatalogDocument, parse_catalog};

use crate::domain::template::{FreeTextTemplates, TemplateDefinition};

/// Every card plus the free-text search templates, fixed for the session.
#[derive(Debug, Clone)]
pub struct Catalog {
    templates: Vec<TemplateDefinition>,
    search: FreeTextTemplates,
}

impl Catalog {
    /// Build a catalog from a document that carries search templates.
    pub fn from_document(document: CatalogDocument) -> Result<Self, CatalogError> {
        let search = document.search.ok_or(CatalogError::MissingSearchTemplates)?;
        Ok(Self { templates: document.templates, search })
    }

    /// Overlay a user document.
    ///
    /// Templates with a known key replace the existing definition in place;
    /// new keys are appended. Search templates are replaced when the overlay has any.
    pub fn merge(mut self, overlay: CatalogDocument) -> Self {
        for definition in overlay.templates {
            match self.templates.iter_mut().find(|existing| existing.key == definition.key) {
                Some(existing) => *existing = definition,
                None => self.templates.push(definition),
            }
        }
        if let Some(search) = overlay.search {
            self.search = search;
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&TemplateDefinition> {
        self.templates.iter().find(|definition| definition.key.as_str() == key)
    }

    /// Cards in catalog order.
    pub fn templates(&self) -> &[TemplateDefinition] {
        &self.templates
    }

    pub fn search(&self) -> &FreeTextTemplates {
        &self.search
    }
}
