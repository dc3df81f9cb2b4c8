pub mod definition;
pub mod free_text;
pub mod key;
pub mod placeholder;
pub mod request;

pub use definition::{Placeholder, TemplateBody, TemplateDefinition};
pub use free_text::FreeTextTemplates;
pub use key::TemplateKey;
pub use placeholder::{PlaceholderToken, is_valid_placeholder_name, placeholder_tokens, substitute};
pub use request::RenderRequest;
