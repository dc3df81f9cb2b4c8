use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{ClipboardWriter, VariantPicker};

use super::show::{PromptOutput, finish};

/// Render a free-text search prompt and optionally copy it.
pub fn execute<P, C>(
    ctx: &mut AppContext<P, C>,
    topic: &str,
    copy: bool,
) -> Result<PromptOutput, AppError>
where
    P: VariantPicker,
    C: ClipboardWriter,
{
    let text = ctx.engine().render_free_text(topic)?;
    finish(ctx, text, copy)
}
