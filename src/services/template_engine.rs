//! Rendering of cards and free-text searches.

use tracing::{debug, warn};

use crate::domain::template::substitute;
use crate::domain::{AppError, Catalog, RenderRequest, TemplateBody, TemplateDefinition};
use crate::ports::VariantPicker;

/// Renders prompts from an immutable catalog.
///
/// Generated cards and search templates pick a variant through `P` on every call.
pub struct TemplateEngine<P: VariantPicker> {
    catalog: Catalog,
    picker: P,
}

impl<P: VariantPicker> TemplateEngine<P> {
    pub fn new(catalog: Catalog, picker: P) -> Self {
        Self { catalog, picker }
    }

    /// Cards in catalog order.
    pub fn templates(&self) -> &[TemplateDefinition] {
        self.catalog.templates()
    }

    /// Look up a card, failing with `UnknownTemplate` when absent.
    pub fn get(&self, key: &str) -> Result<&TemplateDefinition, AppError> {
        self.catalog.get(key).ok_or_else(|| AppError::UnknownTemplate(key.to_string()))
    }

    /// Render a card.
    ///
    /// Every declared placeholder token is replaced by the trimmed request value,
    /// or by the placeholder default when the value is absent or blank.
    pub fn render(&self, request: &RenderRequest) -> Result<String, AppError> {
        let definition = self.get(&request.key)?;

        for name in request.substitutions.keys() {
            if definition.placeholder(name).is_none() {
                warn!(key = %definition.key, placeholder = %name, "ignoring unknown placeholder");
            }
        }

        let body = match &definition.body {
            TemplateBody::Fixed(text) => text,
            TemplateBody::Generated(variants) => {
                let index = self.pick_index(variants.len())?;
                debug!(key = %definition.key, variant = index, "picked template variant");
                &variants[index]
            }
        };

        Ok(substitute(body, |name| {
            definition
                .placeholder(name)
                .map(|placeholder| request.value(name).unwrap_or(placeholder.default.as_str()))
        }))
    }

    /// Render a random search template around `topic`.
    pub fn render_free_text(&self, topic: &str) -> Result<String, AppError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(AppError::EmptyTopic);
        }

        let search = self.catalog.search();
        let index = self.pick_index(search.variants().len())?;
        debug!(variant = index, "picked search template");
        search.render(index, topic)
    }

    fn pick_index(&self, len: usize) -> Result<usize, AppError> {
        if len == 0 {
            return Err(AppError::InternalError("no variants to pick from".to_string()));
        }
        let index = self.picker.pick(len);
        if index >= len {
            return Err(AppError::InternalError(format!(
                "variant picker returned {} for {} variants",
                index, len
            )));
        }
        Ok(index)
    }
}
