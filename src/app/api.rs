//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use crate::app::config::{AppConfig, load_catalog};
use crate::app::{
    AppContext,
    commands::{ask, list, pick, show, theme},
};
use crate::services::{
    EnvSystemThemeProbe, FilesystemPreferenceStore, SystemClipboard, TemplateEngine,
    ThreadRngPicker, system_clipboard,
};

pub use crate::app::commands::list::TemplateSummary;
pub use crate::app::commands::show::{PromptOutput, ShowOptions};
pub use crate::domain::{AppError, Theme};

/// Create an `AppContext` from configuration.
fn create_context(
    config: &AppConfig,
) -> Result<AppContext<ThreadRngPicker, SystemClipboard>, AppError> {
    let engine = TemplateEngine::new(load_catalog(config)?, ThreadRngPicker);
    Ok(AppContext::new(engine, system_clipboard()))
}

fn preference_store(config: &AppConfig) -> FilesystemPreferenceStore {
    FilesystemPreferenceStore::new(config.preferences_path())
}

/// List every configured card.
pub fn list(config: &AppConfig) -> Result<Vec<TemplateSummary>, AppError> {
    let engine = TemplateEngine::new(load_catalog(config)?, ThreadRngPicker);
    Ok(list::execute(&engine))
}

/// Render a card, optionally copying it to the clipboard.
pub fn show(config: &AppConfig, options: ShowOptions) -> Result<PromptOutput, AppError> {
    let mut ctx = create_context(config)?;
    show::execute(&mut ctx, options)
}

/// Render a free-text search prompt, optionally copying it to the clipboard.
pub fn ask(config: &AppConfig, topic: &str, copy: bool) -> Result<PromptOutput, AppError> {
    let mut ctx = create_context(config)?;
    ask::execute(&mut ctx, topic, copy)
}

/// Run the interactive picker.
pub fn pick(config: &AppConfig) -> Result<(), AppError> {
    let current = theme::resolve(&preference_store(config), &EnvSystemThemeProbe::from_env())?;
    let mut ctx = create_context(config)?;
    pick::execute(&mut ctx, current)
}

/// Current theme: stored preference, else the system preference.
pub fn theme_show(config: &AppConfig) -> Result<Theme, AppError> {
    theme::resolve(&preference_store(config), &EnvSystemThemeProbe::from_env())
}

/// Flip and persist the theme.
pub fn theme_toggle(config: &AppConfig) -> Result<Theme, AppError> {
    theme::toggle(&preference_store(config), &EnvSystemThemeProbe::from_env())
}

/// Persist an explicit theme.
pub fn theme_set(config: &AppConfig, value: Theme) -> Result<Theme, AppError> {
    theme::set(&preference_store(config), value)
}
