use std::time::Instant;

use crate::domain::{AppError, CopyFeedback};
use crate::ports::ClipboardWriter;

/// Copy `text` and record the result on `feedback`.
///
/// The error is returned to the caller after it has been recorded.
pub fn execute<C: ClipboardWriter>(
    clipboard: &mut C,
    text: &str,
    feedback: &mut CopyFeedback,
    now: Instant,
) -> Result<(), AppError> {
    let result = clipboard.write_text(text);
    feedback.record(result.is_ok(), now);
    result
}
