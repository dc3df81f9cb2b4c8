mod catalog_embedded;
mod catalog_file;
mod clipboard_arboard;
mod clipboard_command;
mod clipboard_fallback;
mod preference_filesystem;
mod random_picker;
mod system_theme_env;
mod template_engine;

pub use catalog_embedded::EmbeddedCatalog;
pub use catalog_file::load_catalog_file;
pub use clipboard_arboard::ArboardClipboardWriter;
pub use clipboard_command::CommandClipboardWriter;
pub use clipboard_fallback::{CopySource, FallbackClipboardWriter};
pub use preference_filesystem::FilesystemPreferenceStore;
pub use random_picker::ThreadRngPicker;
pub use system_theme_env::{COLORFGBG_VAR, EnvSystemThemeProbe};
pub use template_engine::TemplateEngine;

/// Clipboard used by the CLI: system clipboard first, external command second.
pub type SystemClipboard = FallbackClipboardWriter<ArboardClipboardWriter, CommandClipboardWriter>;

pub fn system_clipboard() -> SystemClipboard {
    FallbackClipboardWriter::new(ArboardClipboardWriter::new(), CommandClipboardWriter::new())
}
