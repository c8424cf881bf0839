#![cfg(feature = "ssr")]

use leptos_router::StaticSegment;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::location::RequestUrl;

use super::*;
use crate::pages::account::{CHANGE_PASSWORD_TITLE, ChangePasswordPage};
use crate::state::session::{Role, Session};
use crate::state::theme::ThemeMode;

fn signed_in(role: Role) -> SessionState {
    SessionState::hydrated(Some(Session { identity: "Nguyen A".into(), role, authenticated: true }))
}

fn console_routes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| "not found">
                <ParentRoute path=StaticSegment("admin") view=AdminLayout>
                    <Route path=StaticSegment("change-password") view=ChangePasswordPage/>
                </ParentRoute>
                <ParentRoute path=StaticSegment("staff") view=StaffLayout>
                    <Route path=StaticSegment("change-password") view=ChangePasswordPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

fn render_at(path: &str, session: SessionState) -> String {
    let owner = Owner::new_root(None);
    owner.with(|| {
        provide_context(RequestUrl::new(path));
        provide_context(RwSignal::new(session));
        provide_context(RwSignal::new(ThemeState::default()));
        console_routes().to_html()
    })
}

/// Opening tag of the first anchor pointing at `href`.
fn anchor_tag<'a>(html: &'a str, href: &str) -> &'a str {
    let needle = format!(r#"href="{href}""#);
    let at = html.find(&needle).unwrap_or_else(|| panic!("no anchor for {href}"));
    let start = html[..at].rfind('<').expect("anchor start");
    let end = at + html[at..].find('>').expect("anchor end");
    &html[start..=end]
}

#[test]
fn admin_change_password_mounts_full_admin_shell() {
    let html = render_at("/admin/change-password", signed_in(Role::Admin));

    assert!(html.contains(r#"class="navbar""#));
    assert!(html.contains(r#"class="sidebar""#));
    assert!(html.contains("Nguyen A"));
    assert!(html.contains(&format!(r#"<h1 class="page-title">{CHANGE_PASSWORD_TITLE}</h1>"#)));
    assert!(html.contains(r#"<form class="password-form""#));
    assert!(html.contains(r#"data-area="/admin""#));
    assert!(html.contains(r#"data-role="admin""#));
    assert!(html.contains(r#"class="toast-stack""#));
}

#[test]
fn admin_sidebar_marks_change_password_active() {
    let html = render_at("/admin/change-password", signed_in(Role::Admin));
    assert!(anchor_tag(&html, "/admin/change-password").contains(r#"aria-current="page""#));
    assert!(!anchor_tag(&html, "/admin/parking-lots").contains("aria-current"));
}

#[test]
fn signed_out_session_leaves_content_slot_unmounted() {
    let html = render_at("/admin/change-password", SessionState::hydrated(None));

    assert!(html.contains("shell-placeholder"));
    assert!(html.contains("Đang chuyển hướng đến trang đăng nhập..."));
    assert!(!html.contains("navbar"));
    assert!(!html.contains("sidebar"));
    assert!(!html.contains("password-form"));
    assert!(!html.contains(CHANGE_PASSWORD_TITLE));
}

#[test]
fn staff_session_in_admin_area_is_not_mounted() {
    let html = render_at("/admin/change-password", signed_in(Role::Staff));
    assert!(html.contains("shell-placeholder"));
    assert!(!html.contains("password-form"));
}

#[test]
fn unhydrated_session_renders_loading_placeholder() {
    let html = render_at("/staff/change-password", SessionState::default());
    assert!(html.contains("Đang tải..."));
    assert!(!html.contains("password-form"));
}

#[test]
fn staff_shell_uses_staff_sidebar() {
    let html = render_at("/staff/change-password", signed_in(Role::Staff));
    assert!(html.contains(r#"data-role="staff""#));
    assert!(html.contains(r#"href="/staff/vehicles""#));
    assert!(!html.contains(r#"href="/admin/parking-lots""#));
}

#[test]
fn theme_flip_reaches_shell_and_toggle() {
    let owner = Owner::new_root(None);
    owner.with(|| {
        let theme = RwSignal::new(ThemeState { mode: ThemeMode::Light });
        provide_context(RequestUrl::new("/admin/change-password"));
        provide_context(RwSignal::new(signed_in(Role::Admin)));
        provide_context(theme);

        let light = console_routes().to_html();
        theme.update(|t| t.mode = t.mode.toggled());
        let dark = console_routes().to_html();

        assert!(light.contains(r#"data-theme="light""#));
        assert!(dark.contains(r#"data-theme="dark""#));
        assert!(!dark.contains(r#"data-theme="light""#));
        assert!(light.contains(ThemeMode::Light.toggle_glyph()));
        assert!(dark.contains(ThemeMode::Dark.toggle_glyph()));
    });
}

#[test]
fn theme_toggle_title_is_localized() {
    let html = render_at("/admin/change-password", signed_in(Role::Admin));
    assert!(html.contains(r#"title="Chuyển giao diện sáng/tối""#));
}
