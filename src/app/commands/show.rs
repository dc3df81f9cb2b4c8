use std::collections::BTreeMap;

use tracing::warn;

use crate::app::AppContext;
use crate::domain::{AppError, RenderRequest};
use crate::ports::{ClipboardWriter, VariantPicker};

/// Options for rendering one card.
#[derive(Debug, Clone, Default)]
pub struct ShowOptions {
    pub key: String,
    pub substitutions: BTreeMap<String, String>,
    pub copy: bool,
}

/// A rendered prompt and whether it reached the clipboard.
///
/// A failed copy still yields the prompt, with `copied` false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptOutput {
    pub text: String,
    pub copied: bool,
}

/// Render a card and optionally copy it.
pub fn execute<P, C>(
    ctx: &mut AppContext<P, C>,
    options: ShowOptions,
) -> Result<PromptOutput, AppError>
where
    P: VariantPicker,
    C: ClipboardWriter,
{
    let request = RenderRequest { key: options.key, substitutions: options.substitutions };
    let text = ctx.engine().render(&request)?;
    finish(ctx, text, options.copy)
}

pub(super) fn finish<P, C>(
    ctx: &mut AppContext<P, C>,
    text: String,
    copy: bool,
) -> Result<PromptOutput, AppError>
where
    P: VariantPicker,
    C: ClipboardWriter,
{
    let copied = copy && copy_prompt(ctx.clipboard_mut(), &text);
    Ok(PromptOutput { text, copied })
}

fn copy_prompt<C: ClipboardWriter>(clipboard: &mut C, text: &str) -> bool {
    match clipboard.write_text(text) {
        Ok(()) => true,
        Err(err) => {
            warn!(error = %err, "could not copy prompt");
            false
        }
    }
}
