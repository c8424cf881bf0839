//! Fixed top bar shared by every protected layout.

use leptos::prelude::*;

use crate::components::session_menu::SessionMenu;
use crate::components::theme_toggle::ThemeToggle;
use crate::routing::{PUBLIC_HOME, RouteGroup};

/// Brand on the left, theme toggle and session menu on the right.
///
/// Structure is identical for every role; only the menu's profile target
/// comes from the group.
#[component]
pub fn TopNavBar(group: &'static RouteGroup) -> impl IntoView {
    view! {
        <header class="navbar">
            <a href=PUBLIC_HOME class="navbar__brand" title="Trang chủ">
                <span class="navbar__logo" aria-hidden="true">"P"</span>
                <span class="navbar__title">"Parking Console"</span>
            </a>
            <span class="navbar__spacer"></span>
            <ThemeToggle/>
            <SessionMenu profile_route=group.profile_route()/>
        </header>
    }
}
