use std::env;

use crate::ports::SystemThemeProbe;

/// Terminal background variable, `fg;bg` or `fg;default;bg`.
pub const COLORFGBG_VAR: &str = "COLORFGBG";

/// System theme query based on the `COLORFGBG` terminal convention.
///
/// Background colors 0-6 and 8 are dark; anything else, or no value, is light.
#[derive(Debug, Clone, Default)]
pub struct EnvSystemThemeProbe {
    colorfgbg: Option<String>,
}

impl EnvSystemThemeProbe {
    pub fn new(colorfgbg: Option<String>) -> Self {
        Self { colorfgbg }
    }

    pub fn from_env() -> Self {
        Self::new(env::var(COLORFGBG_VAR).ok())
    }
}

impl SystemThemeProbe for EnvSystemThemeProbe {
    fn prefers_dark(&self) -> bool {
        self.colorfgbg
            .as_deref()
            .and_then(|value| value.rsplit(';').next())
            .and_then(|background| background.trim().parse::<u8>().ok())
            .is_some_and(|background| background <= 6 || background == 8)
    }
}
