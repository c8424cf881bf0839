#![cfg(feature = "ssr")]

use leptos_router::StaticSegment;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::location::RequestUrl;

use super::*;
use crate::components::shell::{AdminLayout, StaffLayout};
use crate::state::session::{Role, Session};
use crate::state::theme::ThemeState;

/// Render `path` through both protected areas with a session for `role`.
fn render_in_area(path: &str, role: Role) -> String {
    let owner = Owner::new_root(None);
    owner.with(|| {
        provide_context(RequestUrl::new(path));
        provide_context(RwSignal::new(SessionState::hydrated(Some(Session {
            identity: "Tran B".into(),
            role,
            authenticated: true,
        }))));
        provide_context(RwSignal::new(ThemeState::default()));
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
        .to_html()
    })
}

fn form_subtree(html: &str) -> &str {
    let start = html.find("<form").expect("form start");
    let end = start + html[start..].find("</form>").expect("form end") + "</form>".len();
    &html[start..end]
}

#[test]
fn change_password_page_has_title_and_form() {
    let html = render_in_area("/admin/change-password", Role::Admin);
    assert!(html.contains(CHANGE_PASSWORD_TITLE));
    assert!(html.contains("password-form"));
    assert!(html.contains("Xác nhận mật khẩu mới"));
}

#[test]
fn change_password_form_is_identical_under_admin_and_staff_shells() {
    let admin = render_in_area("/admin/change-password", Role::Admin);
    let staff = render_in_area("/staff/change-password", Role::Staff);

    // The surrounding shells differ; the widget must not.
    assert!(admin.contains(r#"data-role="admin""#));
    assert!(staff.contains(r#"data-role="staff""#));
    assert_eq!(form_subtree(&admin), form_subtree(&staff));
}
