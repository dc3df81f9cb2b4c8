use serde::Serialize;

use crate::domain::{Placeholder, TemplateDefinition};
use crate::ports::VariantPicker;
use crate::services::TemplateEngine;

/// One card as shown by `list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateSummary {
    pub key: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub generated: bool,
    pub placeholders: Vec<Placeholder>,
}

impl From<&TemplateDefinition> for TemplateSummary {
    fn from(definition: &TemplateDefinition) -> Self {
        Self {
            key: definition.key.to_string(),
            title: definition.title.clone(),
            description: definition.description.clone(),
            generated: definition.body.is_generated(),
            placeholders: definition.placeholders.clone(),
        }
    }
}

/// Summaries of every card in catalog order.
pub fn execute<P: VariantPicker>(engine: &TemplateEngine<P>) -> Vec<TemplateSummary> {
    engine.templates().iter().map(TemplateSummary::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{EmbeddedCatalog, ThreadRngPicker};

    #[test]
    fn lists_cards_with_placeholders() {
        let engine = TemplateEngine::new(EmbeddedCatalog::load().unwrap(), ThreadRngPicker);
        let summaries = execute(&engine);

        assert_eq!(summaries.len(), 9);
        assert!(summaries[0].generated);

        let explain = summaries.iter().find(|s| s.key == "explain").unwrap();
        let names: Vec<&str> = explain.placeholders.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Subject", "Language"]);
    }

    #[test]
    fn serializes_without_empty_description() {
        let summary = TemplateSummary {
            key: "k".to_string(),
            title: "T".to_string(),
            description: None,
            generated: false,
            placeholders: Vec::new(),
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("description").is_none());
        assert_eq!(json["key"], "k");
    }
}
