//! Role navigation column.
//!
//! The item sequence is injected by the shell instance; this component has
//! no knowledge of roles. CSS hides it below the `lg` breakpoint.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routing::nav::{NavigationItem, is_active};

#[component]
pub fn RoleSidebar(items: &'static [NavigationItem], home: &'static str) -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <aside class="sidebar">
            <nav class="sidebar__nav">
                {items
                    .iter()
                    .map(|item| {
                        let target = item.target;
                        let active = move || pathname.with(|path| is_active(path, target, home));
                        view! {
                            <a
                                href=target
                                class=move || if active() { "sidebar__item sidebar__item--active" } else { "sidebar__item" }
                                aria-current=move || active().then_some("page")
                            >
                                <span class="sidebar__icon" aria-hidden="true">{item.icon.glyph()}</span>
                                <span class="sidebar__label">{item.label}</span>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
        </aside>
    }
}
