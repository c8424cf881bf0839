//! Account pages mounted identically under every protected area.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use leptos::prelude::*;

use crate::components::change_password_form::ChangePasswordForm;
use crate::state::session::SessionState;

pub const CHANGE_PASSWORD_TITLE: &str = "Đổi mật khẩu";

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    view! {
        <div class="page account-page">
            <h1 class="page-title">{CHANGE_PASSWORD_TITLE}</h1>
            <ChangePasswordForm/>
        </div>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let name = move || session.with(|s| s.session.identity.clone());
    let role = move || session.with(|s| s.session.role.label());

    view! {
        <div class="page account-page">
            <h1 class="page-title">"Hồ sơ"</h1>
            <dl class="profile">
                <dt>"Tên hiển thị"</dt>
                <dd>{name}</dd>
                <dt>"Vai trò"</dt>
                <dd>{role}</dd>
            </dl>
        </div>
    }
}
