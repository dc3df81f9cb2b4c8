/// Port for the system-level dark mode query used when no preference is stored.
pub trait SystemThemeProbe {
    fn prefers_dark(&self) -> bool;
}
