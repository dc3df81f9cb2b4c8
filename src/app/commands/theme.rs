use crate::domain::{AppError, Theme};
use crate::ports::{PreferenceStore, SystemThemeProbe};

/// Stored theme, or the system preference when none is stored.
pub fn resolve<S, T>(store: &S, probe: &T) -> Result<Theme, AppError>
where
    S: PreferenceStore,
    T: SystemThemeProbe,
{
    Ok(store.load_theme()?.unwrap_or_else(|| Theme::from_prefers_dark(probe.prefers_dark())))
}

/// Flip the resolved theme and persist the result.
pub fn toggle<S, T>(store: &S, probe: &T) -> Result<Theme, AppError>
where
    S: PreferenceStore,
    T: SystemThemeProbe,
{
    let next = resolve(store, probe)?.toggled();
    store.save_theme(next)?;
    Ok(next)
}

/// Persist an explicit choice.
pub fn set<S: PreferenceStore>(store: &S, theme: Theme) -> Result<Theme, AppError> {
    store.save_theme(theme)?;
    Ok(theme)
}
