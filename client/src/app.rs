//! Root application component with routing and context providers.
//!
//! ROUTE MAP
//! =========
//! - `/`, `/auth`, `/posts`: public, no shell.
//! - `/admin/...`: `AdminLayout` shell, admin sidebar.
//! - `/staff/...`: `StaffLayout` shell, staff sidebar.
//!
//! Each protected subtree ends in a wildcard so unknown paths under a
//! guarded prefix still pass through that prefix's guard.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::shell::{AdminLayout, StaffLayout};
use crate::pages::account::{ChangePasswordPage, ProfilePage};
use crate::pages::admin::{AdminDashboardPage, AdminPostsPage, ParkingLotsPage, StaffAccountsPage};
use crate::pages::auth::AuthPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::posts::PostsPage;
use crate::pages::staff::{StaffDashboardPage, TicketsPage, VehiclesPage};
use crate::routing::{ROUTE_GROUPS, validate_groups};
use crate::state::session::SessionState;
use crate::state::theme::ThemeState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="vi" data-theme="light">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides session and theme contexts, hydrates both once on the client,
/// and declares the route groups.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let theme = RwSignal::new(ThemeState::default());
    provide_context(session);
    provide_context(theme);

    if let Err(e) = validate_groups(&ROUTE_GROUPS) {
        log::error!("route table rejected: {e}");
    }

    // Effects only run in the browser, after hydration has matched the
    // server markup.
    Effect::new(move || {
        let mode = crate::util::theme::read_preference();
        crate::util::theme::apply(mode);
        theme.set(ThemeState { mode });
    });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let current = crate::net::api::fetch_current_session().await;
        log::debug!("session hydrated: authenticated={}", current.is_some());
        session.set(SessionState::hydrated(current));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/parking-console.css"/>
        <Title text="Quản lý bãi đỗ xe"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("auth") view=AuthPage/>
                <Route path=StaticSegment("posts") view=PostsPage/>
                <ParentRoute path=StaticSegment("admin") view=AdminLayout>
                    <Route path=StaticSegment("") view=AdminDashboardPage/>
                    <Route path=StaticSegment("parking-lots") view=ParkingLotsPage/>
                    <Route path=StaticSegment("staff-accounts") view=StaffAccountsPage/>
                    <Route path=StaticSegment("posts") view=AdminPostsPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("change-password") view=ChangePasswordPage/>
                    <Route path=WildcardSegment("rest") view=NotFoundPage/>
                </ParentRoute>
                <ParentRoute path=StaticSegment("staff") view=StaffLayout>
                    <Route path=StaticSegment("") view=StaffDashboardPage/>
                    <Route path=StaticSegment("vehicles") view=VehiclesPage/>
                    <Route path=StaticSegment("tickets") view=TicketsPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("change-password") view=ChangePasswordPage/>
                    <Route path=WildcardSegment("rest") view=NotFoundPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
