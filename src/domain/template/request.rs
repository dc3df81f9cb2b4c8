use std::collections::BTreeMap;

/// One render of one card: the key plus whatever the user typed for each placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderRequest {
    pub key: String,
    pub substitutions: BTreeMap<String, String>,
}

impl RenderRequest {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into(), substitutions: BTreeMap::new() }
    }

    /// Add a substitution, replacing any earlier value for the same name.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.substitutions.insert(name.into(), value.into());
        self
    }

    /// The trimmed user value for `name`, or `None` when absent or blank.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.substitutions.get(name).map(|value| value.trim()).filter(|value| !value.is_empty())
    }
}
