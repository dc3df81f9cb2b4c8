//! Interactive card picker.

use std::io::ErrorKind;
use std::time::Instant;

use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme as DialogTheme};
use dialoguer::{Error as DialoguerError, Input, Select};

use crate::app::AppContext;
use crate::domain::{AppError, CopyFeedback, RenderRequest, TemplateDefinition, Theme};
use crate::ports::{ClipboardWriter, VariantPicker};

use super::copy;

const SEARCH_LABEL: &str = "Search (free text)…";

/// What the user asked for after seeing a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionAction {
    Copy,
    Regenerate,
    EditInputs,
    Back,
    Quit,
}

impl SessionAction {
    fn label(self, feedback: &CopyFeedback, now: Instant) -> &'static str {
        match self {
            SessionAction::Copy => feedback.label(now),
            SessionAction::Regenerate => "Regenerate",
            SessionAction::EditInputs => "Edit inputs",
            SessionAction::Back => "Back",
            SessionAction::Quit => "Quit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionEnd {
    Back,
    Quit,
}

/// What the current prompt supports.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SessionShape {
    pub regenerable: bool,
    pub editable: bool,
}

pub(crate) fn session_actions(shape: SessionShape) -> Vec<SessionAction> {
    let mut actions = vec![SessionAction::Copy];
    if shape.regenerable {
        actions.push(SessionAction::Regenerate);
    }
    if shape.editable {
        actions.push(SessionAction::EditInputs);
    }
    actions.push(SessionAction::Back);
    actions.push(SessionAction::Quit);
    actions
}

fn dialog_theme(theme: Theme) -> Box<dyn DialogTheme> {
    match theme {
        Theme::Dark => Box::new(ColorfulTheme::default()),
        Theme::Light => Box::new(SimpleTheme),
    }
}

/// Run the picker until the user quits.
pub fn execute<P, C>(ctx: &mut AppContext<P, C>, theme: Theme) -> Result<(), AppError>
where
    P: VariantPicker,
    C: ClipboardWriter,
{
    let dialog = dialog_theme(theme);

    loop {
        let definitions: Vec<TemplateDefinition> = ctx.engine().templates().to_vec();
        let mut items: Vec<String> = definitions
            .iter()
            .map(|definition| match &definition.description {
                Some(description) => format!("{} - {}", definition.title, description),
                None => definition.title.clone(),
            })
            .collect();
        items.push(SEARCH_LABEL.to_string());

        let Some(selection) = select(dialog.as_ref(), "Pick a prompt", &items)? else {
            return Ok(());
        };

        let end = match definitions.get(selection) {
            Some(definition) => card_session(ctx, dialog.as_ref(), definition)?,
            None => search_session(ctx, dialog.as_ref())?,
        };
        if end == SessionEnd::Quit {
            return Ok(());
        }
    }
}

fn card_session<P, C>(
    ctx: &mut AppContext<P, C>,
    dialog: &dyn DialogTheme,
    definition: &TemplateDefinition,
) -> Result<SessionEnd, AppError>
where
    P: VariantPicker,
    C: ClipboardWriter,
{
    let mut request = RenderRequest::new(definition.key.as_str());
    if !prompt_inputs(dialog, definition, &mut request)? {
        return Ok(SessionEnd::Back);
    }

    let shape = SessionShape {
        regenerable: definition.body.is_generated(),
        editable: definition.needs_input(),
    };
    let mut text = ctx.engine().render(&request)?;
    let mut feedback = CopyFeedback::new();

    loop {
        println!("\n{}\n", text);
        match choose_action(dialog, shape, &feedback)? {
            SessionAction::Copy => copy_with_feedback(ctx, &text, &mut feedback),
            SessionAction::Regenerate => text = ctx.engine().render(&request)?,
            SessionAction::EditInputs => {
                if prompt_inputs(dialog, definition, &mut request)? {
                    text = ctx.engine().render(&request)?;
                }
            }
            SessionAction::Back => return Ok(SessionEnd::Back),
            SessionAction::Quit => return Ok(SessionEnd::Quit),
        }
    }
}

fn search_session<P, C>(
    ctx: &mut AppContext<P, C>,
    dialog: &dyn DialogTheme,
) -> Result<SessionEnd, AppError>
where
    P: VariantPicker,
    C: ClipboardWriter,
{
    let Some(topic) = input(dialog, "What do you want to learn about?", "")? else {
        return Ok(SessionEnd::Back);
    };
    if topic.trim().is_empty() {
        return Ok(SessionEnd::Back);
    }

    let shape = SessionShape { regenerable: true, editable: false };
    let mut text = ctx.engine().render_free_text(&topic)?;
    let mut feedback = CopyFeedback::new();

    loop {
        println!("\n{}\n", text);
        match choose_action(dialog, shape, &feedback)? {
            SessionAction::Copy => copy_with_feedback(ctx, &text, &mut feedback),
            SessionAction::Regenerate => text = ctx.engine().render_free_text(&topic)?,
            SessionAction::EditInputs | SessionAction::Back => return Ok(SessionEnd::Back),
            SessionAction::Quit => return Ok(SessionEnd::Quit),
        }
    }
}

/// Ask for every placeholder. Returns `false` when the user backed out.
fn prompt_inputs(
    dialog: &dyn DialogTheme,
    definition: &TemplateDefinition,
    request: &mut RenderRequest,
) -> Result<bool, AppError> {
    for placeholder in &definition.placeholders {
        let current = request.substitutions.get(&placeholder.name).cloned().unwrap_or_default();
        let prompt = format!("{} (e.g., {})", placeholder.name, placeholder.default);
        let Some(value) = input(dialog, &prompt, &current)? else {
            return Ok(false);
        };
        request.substitutions.insert(placeholder.name.clone(), value);
    }
    Ok(true)
}

fn copy_with_feedback<P, C>(ctx: &mut AppContext<P, C>, text: &str, feedback: &mut CopyFeedback)
where
    P: VariantPicker,
    C: ClipboardWriter,
{
    if let Err(err) = copy::execute(ctx.clipboard_mut(), text, feedback, Instant::now()) {
        eprintln!("⚠️  {}", err);
    }
}

fn choose_action(
    dialog: &dyn DialogTheme,
    shape: SessionShape,
    feedback: &CopyFeedback,
) -> Result<SessionAction, AppError> {
    let actions = session_actions(shape);
    let now = Instant::now();
    let labels: Vec<&str> = actions.iter().map(|action| action.label(feedback, now)).collect();

    match select(dialog, "Action", &labels)? {
        Some(index) => Ok(actions.get(index).copied().unwrap_or(SessionAction::Back)),
        None => Ok(SessionAction::Back),
    }
}

fn select<T: ToString>(
    dialog: &dyn DialogTheme,
    prompt: &str,
    items: &[T],
) -> Result<Option<usize>, AppError> {
    match Select::with_theme(dialog).with_prompt(prompt).items(items).default(0).interact_opt() {
        Ok(selection) => Ok(selection),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::config_error(format!("Selection failed: {}", err))),
    }
}

fn input(
    dialog: &dyn DialogTheme,
    prompt: &str,
    initial: &str,
) -> Result<Option<String>, AppError> {
    let result = Input::<String>::with_theme(dialog)
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text();

    match result {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::config_error(format!("Failed to read input: {}", err))),
    }
}
