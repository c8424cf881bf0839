//! Theme preference initialization, application and persistence.
//!
//! Reads the stored preference from `sessionStorage` and applies a
//! `data-theme` attribute to the `<html>` element. Storing survives in-app
//! navigation and reloads within one browsing session; longer-lived
//! persistence belongs to the backend profile, not this crate.
//!
//! TRADE-OFFS
//! ==========
//! Browser access is hydrate-only; SSR paths no-op to keep server rendering
//! deterministic (always light on first paint).

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::theme::ThemeMode;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "parking_console_theme";

/// Read the stored preference, falling back to the system color scheme.
pub fn read_preference() -> ThemeMode {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return ThemeMode::Light;
        };

        if let Ok(Some(storage)) = window.session_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                if let Some(mode) = ThemeMode::from_attr(&val) {
                    return mode;
                }
            }
        }

        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());
        if prefers_dark { ThemeMode::Dark } else { ThemeMode::Light }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ThemeMode::Light
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", mode.as_attr());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}

/// Flip the mode, apply it and store the new preference.
pub fn toggle(current: ThemeMode) -> ThemeMode {
    let next = current.toggled();
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.session_storage() {
                let _ = storage.set_item(STORAGE_KEY, next.as_attr());
            }
        }
    }
    next
}
