/// Catalog loading and validation error.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to parse catalog {origin}: {reason}")]
    Parse { origin: String, reason: String },

    #[error(
        "Invalid template key '{0}': must be lowercase alphanumeric with hyphens or underscores"
    )]
    InvalidKey(String),

    #[error("Template '{0}' is defined more than once")]
    DuplicateKey(String),

    #[error("Template '{key}' must define exactly one of `body`, `variants`, or `parts`")]
    BodyConflict { key: String },

    #[error("Template '{key}' has no variants to choose from")]
    EmptyVariants { key: String },

    #[error("Template '{key}' declares invalid placeholder name '{name}'")]
    InvalidPlaceholderName { key: String, name: String },

    #[error("Template '{key}' declares placeholder '{name}' more than once")]
    DuplicatePlaceholder { key: String, name: String },

    #[error("Template '{key}' placeholder '{name}' has a blank default")]
    BlankDefault { key: String, name: String },

    #[error("Template '{key}' uses undeclared placeholders: {names}")]
    UndeclaredPlaceholder { key: String, names: String },

    #[error("Template '{key}' declares placeholders it never uses: {names}")]
    UnusedPlaceholder { key: String, names: String },

    #[error("Catalog defines no search templates")]
    MissingSearchTemplates,

    #[error("Search template #{index} is invalid: {reason}")]
    InvalidSearchTemplate { index: usize, reason: String },
}
