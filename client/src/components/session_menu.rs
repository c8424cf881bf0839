//! Account dropdown showing the signed-in identity with Profile and Logout.
//!
//! DESIGN
//! ======
//! Open/closed lives in a local `RouteMenu` bound to the current path. Outside
//! clicks land on a full-screen backdrop that is only visible while open, so
//! no document listeners are needed. Any route change closes the menu.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::menu::{MenuEvent, RouteMenu};
use crate::state::session::{SessionState, logout_transition};
use crate::util::guard::redirect_options;

#[component]
pub fn SessionMenu(#[prop(into)] profile_route: String) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let menu = RouteMenu::new(use_location().pathname);
    menu.close_on_route_change();
    let navigate = use_navigate();

    let send = move |event: MenuEvent| menu.send(event);

    let display_name = move || session.with(|s| s.session.identity.clone());
    let role_label = move || session.with(|s| s.session.role.label());
    let initial = move || {
        session.with(|s| s.session.identity.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default())
    };

    let hidden = move || !menu.is_open();

    let on_logout = move |_| {
        send(MenuEvent::ItemSelected);
        let mut target = "";
        session.update(|s| target = logout_transition(s));
        navigate(target, redirect_options());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(crate::net::api::logout());
    };

    view! {
        <div class="session-menu">
            <button
                class="btn session-menu__trigger"
                aria-haspopup="menu"
                aria-expanded=move || if menu.is_open() { "true" } else { "false" }
                on:click=move |_| send(MenuEvent::Trigger)
            >
                <span class="session-menu__avatar">{initial}</span>
                <span class="session-menu__name">{display_name}</span>
            </button>
            <div class="session-menu__backdrop" hidden=hidden on:click=move |_| send(MenuEvent::OutsideInteraction)></div>
            <div
                class="session-menu__panel"
                role="menu"
                hidden=hidden
                tabindex="-1"
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        send(MenuEvent::Close);
                    }
                }
            >
                <div class="session-menu__identity">
                    <span class="session-menu__identity-name">{display_name}</span>
                    <span class="session-menu__identity-role">{role_label}</span>
                </div>
                <a
                    href=profile_route
                    class="session-menu__item"
                    role="menuitem"
                    on:click=move |_| send(MenuEvent::ItemSelected)
                >
                    "Profile"
                </a>
                <button
                    class="session-menu__item session-menu__item--danger"
                    role="menuitem"
                    on:click=on_logout
                >
                    "Logout"
                </button>
            </div>
        </div>
    }
}
