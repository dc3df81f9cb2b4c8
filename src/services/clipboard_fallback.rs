use tracing::warn;

use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// Which writer ended up holding the copied text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopySource {
    Primary,
    Fallback,
}

/// Tries a primary clipboard, then a secondary one.
pub struct FallbackClipboardWriter<P, F> {
    primary: P,
    fallback: F,
}

impl<P: ClipboardWriter, F: ClipboardWriter> FallbackClipboardWriter<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }

    /// Copy `text`, reporting which writer succeeded.
    ///
    /// Fails only when both writers fail; the error carries both reasons.
    pub fn copy(&mut self, text: &str) -> Result<CopySource, AppError> {
        let primary_err = match self.primary.write_text(text) {
            Ok(()) => return Ok(CopySource::Primary),
            Err(err) => err,
        };
        warn!(error = %primary_err, "primary clipboard failed, trying fallback");

        match self.fallback.write_text(text) {
            Ok(()) => Ok(CopySource::Fallback),
            Err(fallback_err) => Err(AppError::ClipboardError(format!(
                "{}; fallback: {}",
                reason(&primary_err),
                reason(&fallback_err)
            ))),
        }
    }
}

/// Error text without the `Clipboard error:` prefix when it would nest.
fn reason(err: &AppError) -> String {
    match err {
        AppError::ClipboardError(message) => message.clone(),
        other => other.to_string(),
    }
}

impl<P: ClipboardWriter, F: ClipboardWriter> ClipboardWriter for FallbackClipboardWriter<P, F> {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        self.copy(text).map(|_| ())
    }
}
