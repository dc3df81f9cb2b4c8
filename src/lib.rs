//! promptcard: pick, fill, and copy pre-written AI prompts.
//!
//! The free functions below render against the built-in catalog. Use
//! [`TemplateEngine`] directly to render against a custom [`Catalog`].

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use services::{EmbeddedCatalog, ThreadRngPicker};

pub use app::commands::list::TemplateSummary;
pub use domain::{
    AppError, Catalog, CatalogDocument, CatalogError, CopyFeedback, Placeholder, RenderRequest,
    TemplateBody, TemplateDefinition, Theme, parse_catalog,
};
pub use ports::{ClipboardWriter, VariantPicker};
pub use services::TemplateEngine;

/// Template engine over the built-in catalog with uniform random variant selection.
pub fn default_engine() -> Result<TemplateEngine<ThreadRngPicker>, AppError> {
    Ok(TemplateEngine::new(EmbeddedCatalog::load()?, ThreadRngPicker))
}

/// Built-in engine, parsed and validated once per process.
static BUILTIN_ENGINE: LazyLock<Result<TemplateEngine<ThreadRngPicker>, AppError>> =
    LazyLock::new(default_engine);

fn builtin_engine() -> Result<&'static TemplateEngine<ThreadRngPicker>, AppError> {
    BUILTIN_ENGINE
        .as_ref()
        .map_err(|err| AppError::InternalError(format!("built-in catalog is invalid: {}", err)))
}

/// Render a built-in card.
///
/// Blank or missing substitutions fall back to the card's defaults.
pub fn render(key: &str, substitutions: &BTreeMap<String, String>) -> Result<String, AppError> {
    let request = RenderRequest { key: key.to_string(), substitutions: substitutions.clone() };
    builtin_engine()?.render(&request)
}

/// Render a random built-in search template around `topic`.
pub fn render_free_text(topic: &str) -> Result<String, AppError> {
    builtin_engine()?.render_free_text(topic)
}

/// Summaries of the built-in cards.
pub fn templates() -> Result<Vec<TemplateSummary>, AppError> {
    Ok(app::commands::list::execute(builtin_engine()?))
}
