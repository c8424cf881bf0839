//! Sign-in entry point. Unauthorized navigation lands here.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::back_link::BackLink;
use crate::net::types::LoginRequest;
use crate::routing::{PUBLIC_HOME, home_for};
use crate::state::session::SessionState;

/// Trim the username and require both fields.
///
/// # Errors
///
/// Returns the message to show when a field is empty.
pub fn validate_login(username: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Vui lòng nhập tên đăng nhập và mật khẩu.");
    }
    Ok(LoginRequest { username: username.to_owned(), password: password.to_owned() })
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let redirect_to = RwSignal::new(None::<&'static str>);

    Effect::new(move || {
        if let Some(target) = redirect_to.get() {
            navigate(target, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_login(&username.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Đang đăng nhập...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&request).await {
                Ok(signed_in) => {
                    let target = home_for(signed_in.role);
                    session.set(SessionState::hydrated(Some(signed_in)));
                    password.set(String::new());
                    info.set(String::new());
                    busy.set(false);
                    redirect_to.set(Some(target));
                }
                Err(e) => {
                    info.set(format!("Đăng nhập thất bại: {e}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, redirect_to);
    };

    let signed_in_home = move || session.with(|s| s.is_authenticated().then(|| home_for(s.session.role)));

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Đăng nhập"</h1>
                <Show
                    when=move || signed_in_home().is_none()
                    fallback=move || {
                        view! {
                            <p class="login-message">
                                "Bạn đã đăng nhập. "
                                <a href=move || signed_in_home().unwrap_or(PUBLIC_HOME)>"Vào bảng điều khiển"</a>
                            </p>
                        }
                    }
                >
                    <form class="login-form" on:submit=on_submit>
                        <input
                            class="login-input"
                            type="text"
                            autocomplete="username"
                            placeholder="Tên đăng nhập"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            autocomplete="current-password"
                            placeholder="Mật khẩu"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button class="btn btn--primary login-button" type="submit" disabled=move || busy.get()>
                            "Đăng nhập"
                        </button>
                    </form>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <BackLink label="Go Back" href=PUBLIC_HOME/>
            </div>
        </div>
    }
}
