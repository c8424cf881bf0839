//! Light/dark switch for the top bar.

use leptos::prelude::*;

use crate::state::theme::ThemeState;

/// Flips the root `ThemeState`; every component reading it re-renders.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();

    let on_click = move |_| {
        let next = crate::util::theme::toggle(theme.get_untracked().mode);
        theme.update(|t| t.mode = next);
    };

    view! {
        <button class="btn navbar__theme-toggle" on:click=on_click title="Chuyển giao diện sáng/tối">
            {move || theme.get().mode.toggle_glyph()}
        </button>
    }
}
