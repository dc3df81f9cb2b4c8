use crate::ports::{ClipboardWriter, VariantPicker};
use crate::services::TemplateEngine;

/// Application context holding dependencies for command execution.
pub struct AppContext<P: VariantPicker, C: ClipboardWriter> {
    engine: TemplateEngine<P>,
    clipboard: C,
}

impl<P: VariantPicker, C: ClipboardWriter> AppContext<P, C> {
    /// Create a new application context.
    pub fn new(engine: TemplateEngine<P>, clipboard: C) -> Self {
        Self { engine, clipboard }
    }

    /// Get a reference to the template engine.
    pub fn engine(&self) -> &TemplateEngine<P> {
        &self.engine
    }

    /// Get a mutable reference to the clipboard writer.
    pub fn clipboard_mut(&mut self) -> &mut C {
        &mut self.clipboard
    }
}
