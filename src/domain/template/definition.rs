use serde::Serialize;

use super::key::TemplateKey;
use super::placeholder::placeholder_tokens;

/// A named substitution slot and the value used when the caller supplies none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placeholder {
    pub name: String,
    pub default: String,
}

/// Template text: one fixed string, or variants picked at random on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateBody {
    Fixed(String),
    Generated(Vec<String>),
}

impl TemplateBody {
    /// All texts this body can produce.
    pub fn texts(&self) -> &[String] {
        match self {
            TemplateBody::Fixed(text) => std::slice::from_ref(text),
            TemplateBody::Generated(variants) => variants,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, TemplateBody::Generated(_))
    }
}

/// A prompt card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDefinition {
    pub key: TemplateKey,
    pub title: String,
    pub description: Option<String>,
    pub body: TemplateBody,
    pub placeholders: Vec<Placeholder>,
}

impl TemplateDefinition {
    /// Look up a declared placeholder by name.
    pub fn placeholder(&self, name: &str) -> Option<&Placeholder> {
        self.placeholders.iter().find(|placeholder| placeholder.name == name)
    }

    /// Whether rendering this card accepts user input.
    pub fn needs_input(&self) -> bool {
        !self.placeholders.is_empty()
    }

    /// Placeholder names used in the body that the card does not declare.
    pub fn undeclared_placeholders(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for text in self.body.texts() {
            for token in placeholder_tokens(text) {
                if self.placeholder(token.name).is_none()
                    && !names.iter().any(|name| name == token.name)
                {
                    names.push(token.name.to_string());
                }
            }
        }
        names
    }

    /// Declared placeholders that appear in none of the body texts.
    pub fn unused_placeholders(&self) -> Vec<String> {
        self.placeholders
            .iter()
            .filter(|placeholder| {
                !self.body.texts().iter().any(|text| {
                    placeholder_tokens(text).any(|token| token.name == placeholder.name)
                })
            })
            .map(|placeholder| placeholder.name.clone())
            .collect()
    }
}
