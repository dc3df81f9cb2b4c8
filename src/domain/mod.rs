pub mod catalog;
pub mod copy_feedback;
pub mod error;
pub mod template;
pub mod theme;

pub use catalog::{Catalog, CatalogDocument, CatalogError, parse_catalog};
pub use copy_feedback::{CopyFeedback, CopyStatus, FEEDBACK_DURATION};
pub use error::AppError;
pub use template::{
    FreeTextTemplates, Placeholder, RenderRequest, TemplateBody, TemplateDefinition, TemplateKey,
};
pub use theme::Theme;
