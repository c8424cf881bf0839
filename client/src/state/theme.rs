//! Display-mode state shared by every theme-aware component.
//!
//! DESIGN
//! ======
//! One `RwSignal<ThemeState>` lives at the application root. Writes happen
//! only from the toggle, so the event loop serializes them.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Light or dark rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value written to the `data-theme` attribute and to storage.
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored attribute value; anything unknown is `None`.
    pub fn from_attr(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Glyph shown on the toggle: the mode a click switches to.
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub mode: ThemeMode,
}
