use std::fmt;

/// A validated template key.
///
/// Guarantees:
/// - Non-empty
/// - Contains only lowercase ASCII letters, digits, `-`, or `_`
/// - Starts with a letter or digit
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplateKey(String);

impl TemplateKey {
    /// Validate and create a new key. Returns `None` when `key` is malformed.
    pub fn new(key: &str) -> Option<Self> {
        let mut chars = key.chars();
        let valid_first =
            chars.next().is_some_and(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
        let valid_rest =
            chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');

        (valid_first && valid_rest).then(|| Self(key.to_string()))
    }

    /// Return the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::ops::Deref for TemplateKey {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
