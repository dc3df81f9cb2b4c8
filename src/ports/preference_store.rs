use crate::domain::{AppError, Theme};

/// Port for the persisted theme preference.
pub trait PreferenceStore {
    /// Stored theme, or `None` when the user never chose one.
    fn load_theme(&self) -> Result<Option<Theme>, AppError>;

    fn save_theme(&self, theme: Theme) -> Result<(), AppError>;
}
