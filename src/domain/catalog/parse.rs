//! TOML catalog documents.

use serde::Deserialize;

use crate::domain::template::{
    FreeTextTemplates, Placeholder, TemplateBody, TemplateDefinition, TemplateKey,
    is_valid_placeholder_name,
};

use super::error::CatalogError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    search: Option<SearchSection>,
    #[serde(default)]
    templates: Vec<TemplateEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SearchSection {
    variants: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TemplateEntry {
    key: String,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    variants: Option<Vec<String>>,
    #[serde(default)]
    parts: Option<Vec<Vec<String>>>,
    #[serde(default)]
    placeholders: Vec<PlaceholderEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlaceholderEntry {
    name: String,
    default: String,
}

/// A parsed and validated catalog file.
///
/// A document may omit the search section; only the embedded catalog must carry one.
#[derive(Debug, Clone)]
pub struct CatalogDocument {
    pub templates: Vec<TemplateDefinition>,
    pub search: Option<FreeTextTemplates>,
}

/// Parse and validate catalog TOML. `origin` names the source in error messages.
pub fn parse_catalog(origin: &str, content: &str) -> Result<CatalogDocument, CatalogError> {
    let file: CatalogFile = toml::from_str(content)
        .map_err(|e| CatalogError::Parse { origin: origin.to_string(), reason: e.to_string() })?;

    let mut templates: Vec<TemplateDefinition> = Vec::with_capacity(file.templates.len());
    for entry in file.templates {
        let definition = build_definition(entry)?;
        if templates.iter().any(|existing| existing.key == definition.key) {
            return Err(CatalogError::DuplicateKey(definition.key.to_string()));
        }
        templates.push(definition);
    }

    let search = file.search.map(|section| FreeTextTemplates::new(section.variants)).transpose()?;

    Ok(CatalogDocument { templates, search })
}

fn build_definition(entry: TemplateEntry) -> Result<TemplateDefinition, CatalogError> {
    let key = TemplateKey::new(&entry.key).ok_or_else(|| CatalogError::InvalidKey(entry.key))?;

    let body = match (entry.body, entry.variants, entry.parts) {
        (Some(text), None, None) => TemplateBody::Fixed(text),
        (None, Some(variants), None) => {
            if variants.is_empty() {
                return Err(CatalogError::EmptyVariants { key: key.to_string() });
            }
            TemplateBody::Generated(variants)
        }
        (None, None, Some(parts)) => {
            if parts.is_empty() || parts.iter().any(|alternatives| alternatives.is_empty()) {
                return Err(CatalogError::EmptyVariants { key: key.to_string() });
            }
            TemplateBody::Generated(expand_parts(&parts))
        }
        _ => return Err(CatalogError::BodyConflict { key: key.to_string() }),
    };

    let mut placeholders: Vec<Placeholder> = Vec::with_capacity(entry.placeholders.len());
    for placeholder in entry.placeholders {
        if !is_valid_placeholder_name(&placeholder.name) {
            return Err(CatalogError::InvalidPlaceholderName {
                key: key.to_string(),
                name: placeholder.name,
            });
        }
        if placeholders.iter().any(|existing| existing.name == placeholder.name) {
            return Err(CatalogError::DuplicatePlaceholder {
                key: key.to_string(),
                name: placeholder.name,
            });
        }
        if placeholder.default.trim().is_empty() {
            return Err(CatalogError::BlankDefault {
                key: key.to_string(),
                name: placeholder.name,
            });
        }
        placeholders.push(Placeholder { name: placeholder.name, default: placeholder.default });
    }

    let definition = TemplateDefinition {
        key,
        title: entry.title,
        description: entry.description,
        body,
        placeholders,
    };

    let undeclared = definition.undeclared_placeholders();
    if !undeclared.is_empty() {
        return Err(CatalogError::UndeclaredPlaceholder {
            key: definition.key.to_string(),
            names: undeclared.join(", "),
        });
    }

    let unused = definition.unused_placeholders();
    if !unused.is_empty() {
        return Err(CatalogError::UnusedPlaceholder {
            key: definition.key.to_string(),
            names: unused.join(", "),
        });
    }

    Ok(definition)
}

/// Cartesian product of the parts, each combination joined in order.
fn expand_parts(parts: &[Vec<String>]) -> Vec<String> {
    parts.iter().fold(vec![String::new()], |combinations, alternatives| {
        combinations
            .iter()
            .flat_map(|prefix| alternatives.iter().map(move |alt| format!("{}{}", prefix, alt)))
            .collect()
    })
}
