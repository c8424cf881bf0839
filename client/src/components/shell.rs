//! Guarded chrome for one protected route group.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each `ParentRoute` mounts its own shell instance (`AdminLayout`,
//! `StaffLayout`). The shell dispatches the current path, redirects when the
//! session does not qualify, and otherwise renders navbar, sidebar, the
//! route outlet and a notification surface of its own.
//!
//! The outlet is mounted only on `Dispatch::Protected`; pending and
//! redirecting states render a placeholder instead.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::navbar::TopNavBar;
use crate::components::notifications::NotificationSurface;
use crate::components::sidebar::RoleSidebar;
use crate::routing::{ADMIN_GROUP, Dispatch, RouteGroup, STAFF_GROUP};
use crate::state::notify::Notifier;
use crate::state::session::SessionState;
use crate::state::theme::ThemeState;
use crate::util::guard::{guard_outcome, install_redirect};

#[component]
pub fn ProtectedShell(group: &'static RouteGroup) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let theme = expect_context::<RwSignal<ThemeState>>();
    let outcome = guard_outcome(use_location().pathname, session);
    install_redirect(outcome, use_navigate());

    provide_context(Notifier::new());

    let mounted = move || matches!(outcome.get(), Dispatch::Protected(g) if g == group);
    let role = group.layout.role().map_or("public", |r| r.as_attr());

    view! {
        <Show when=mounted fallback=move || view! { <ShellPlaceholder outcome=outcome/> }>
            <div class="shell" data-area=group.path_prefix data-role=role data-theme=move || theme.get().mode.as_attr()>
                <TopNavBar group=group/>
                <div class="shell__body">
                    <RoleSidebar items=group.nav home=group.home/>
                    <main class="shell__content">
                        <div class="shell__content-inner">
                            <Outlet/>
                        </div>
                    </main>
                </div>
                <NotificationSurface/>
            </div>
        </Show>
    }
}

/// Shown while the session hydrates or a redirect is in flight.
#[component]
fn ShellPlaceholder(outcome: Memo<Dispatch>) -> impl IntoView {
    let message = move || match outcome.get() {
        Dispatch::Pending(_) => "Đang tải...",
        _ => "Đang chuyển hướng đến trang đăng nhập...",
    };
    view! {
        <div class="shell-placeholder">
            <p>{message}</p>
        </div>
    }
}

#[component]
pub fn AdminLayout() -> impl IntoView {
    view! { <ProtectedShell group=&ADMIN_GROUP/> }
}

#[component]
pub fn StaffLayout() -> impl IntoView {
    view! { <ProtectedShell group=&STAFF_GROUP/> }
}
