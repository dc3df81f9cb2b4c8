mod clipboard_writer;
mod preference_store;
mod system_theme;
mod variant_picker;

pub use clipboard_writer::ClipboardWriter;
pub use preference_store::PreferenceStore;
pub use system_theme::SystemThemeProbe;
pub use variant_picker::VariantPicker;
