use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::AppError;
use crate::domain::catalog::CatalogError;

/// Sentinel rendered in place of a real topic while validating templates.
const PROBE_TOPIC: &str = "\u{1f}promptcard-topic\u{1f}";

/// Sentence templates for free-text searches.
///
/// Each variant is a minijinja template referencing exactly one variable, `topic`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreeTextTemplates {
    variants: Vec<String>,
}

impl FreeTextTemplates {
    /// Validate and wrap the given variants.
    ///
    /// Every variant must render under strict undefined behavior with only
    /// `topic` bound, and the rendered text must contain the topic.
    pub fn new(variants: Vec<String>) -> Result<Self, CatalogError> {
        if variants.is_empty() {
            return Err(CatalogError::MissingSearchTemplates);
        }

        let env = environment();
        for (index, source) in variants.iter().enumerate() {
            let rendered = render_variant(&env, source, PROBE_TOPIC).map_err(|err| {
                CatalogError::InvalidSearchTemplate { index, reason: err.to_string() }
            })?;
            if !rendered.contains(PROBE_TOPIC) {
                return Err(CatalogError::InvalidSearchTemplate {
                    index,
                    reason: "template never renders `topic`".to_string(),
                });
            }
        }

        Ok(Self { variants })
    }

    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    /// Render variant `index` with the literal `topic`.
    pub fn render(&self, index: usize, topic: &str) -> Result<String, AppError> {
        let source = self.variants.get(index).ok_or_else(|| {
            AppError::InternalError(format!(
                "search variant {} out of range ({} available)",
                index,
                self.variants.len()
            ))
        })?;

        render_variant(&environment(), source, topic)
            .map_err(|err| AppError::TemplateRender { index, reason: err.to_string() })
    }
}

fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env
}

fn render_variant(
    env: &Environment<'_>,
    source: &str,
    topic: &str,
) -> Result<String, minijinja::Error> {
    env.render_str(source, context! { topic => topic })
}
