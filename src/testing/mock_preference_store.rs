use std::cell::RefCell;

use crate::domain::{AppError, Theme};
use crate::ports::{PreferenceStore, SystemThemeProbe};

/// In-memory preference store for testing.
#[derive(Default)]
#[allow(dead_code)]
pub struct MockPreferenceStore {
    pub theme: RefCell<Option<Theme>>,
    pub saves: RefCell<usize>,
}

#[allow(dead_code)]
impl MockPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(theme: Theme) -> Self {
        let store = Self::default();
        *store.theme.borrow_mut() = Some(theme);
        store
    }

    pub fn saves(&self) -> usize {
        *self.saves.borrow()
    }
}

impl PreferenceStore for MockPreferenceStore {
    fn load_theme(&self) -> Result<Option<Theme>, AppError> {
        Ok(*self.theme.borrow())
    }

    fn save_theme(&self, theme: Theme) -> Result<(), AppError> {
        *self.theme.borrow_mut() = Some(theme);
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}

/// System theme probe with a fixed answer.
#[allow(dead_code)]
pub struct FixedSystemTheme(pub bool);

impl SystemThemeProbe for FixedSystemTheme {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}
