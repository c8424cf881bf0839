//! Password change form shared by the admin and staff areas.
//!
//! The form owns its inputs and busy flag. Outcomes leave the widget only as
//! notifications, so it mounts unchanged in either shell.

#[cfg(test)]
#[path = "change_password_form_test.rs"]
mod change_password_form_test;

use leptos::prelude::*;

use crate::net::types::ChangePasswordRequest;
use crate::state::notify::{Notifier, Severity, report};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Local checks before anything is sent. Server-side rules still apply.
///
/// # Errors
///
/// Returns the message to show when a field is missing or inconsistent.
pub fn validate_change_password(current: &str, new: &str, confirm: &str) -> Result<ChangePasswordRequest, &'static str> {
    if current.is_empty() || new.is_empty() || confirm.is_empty() {
        return Err("Vui lòng nhập đầy đủ thông tin.");
    }
    if new.chars().count() < MIN_PASSWORD_LEN {
        return Err("Mật khẩu mới phải có ít nhất 6 ký tự.");
    }
    if new == current {
        return Err("Mật khẩu mới phải khác mật khẩu hiện tại.");
    }
    if new != confirm {
        return Err("Xác nhận mật khẩu không khớp.");
    }
    Ok(ChangePasswordRequest { current_password: current.to_owned(), new_password: new.to_owned() })
}

#[component]
pub fn ChangePasswordForm() -> impl IntoView {
    let notifier = use_context::<Notifier>();
    let current = RwSignal::new(String::new());
    let new = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_change_password(&current.get_untracked(), &new.get_untracked(), &confirm.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                report(notifier, message, Severity::Error);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::change_password(&request).await {
                Ok(()) => {
                    current.set(String::new());
                    new.set(String::new());
                    confirm.set(String::new());
                    report(notifier, "Đổi mật khẩu thành công.", Severity::Success);
                }
                Err(e) => report(notifier, format!("Đổi mật khẩu thất bại: {e}"), Severity::Error),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <form class="password-form" on:submit=on_submit>
            <PasswordField label="Mật khẩu hiện tại" value=current autocomplete="current-password"/>
            <PasswordField label="Mật khẩu mới" value=new autocomplete="new-password"/>
            <PasswordField label="Xác nhận mật khẩu mới" value=confirm autocomplete="new-password"/>
            <button class="btn btn--primary password-form__submit" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Đang lưu..." } else { "Cập nhật" }}
            </button>
        </form>
    }
}

#[component]
fn PasswordField(label: &'static str, value: RwSignal<String>, autocomplete: &'static str) -> impl IntoView {
    view! {
        <label class="password-form__label">
            {label}
            <input
                class="password-form__input"
                type="password"
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}
