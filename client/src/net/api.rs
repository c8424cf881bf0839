//! REST helpers for the auth and post collaborators.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs, since these endpoints are only meaningful in
//! the browser where the session cookie lives.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so a failed call
//! degrades one widget without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ChangePasswordRequest, LoginRequest, PostPage};
use crate::state::session::Session;
#[cfg(feature = "hydrate")]
use super::types::SessionUser;

#[cfg(any(test, feature = "hydrate"))]
fn posts_endpoint(page: u32) -> String {
    format!("/api/posts?page={}", page.max(1))
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(action: &str, status: u16) -> String {
    match status {
        401 | 403 => format!("{action} failed: not authorized"),
        _ => format!("{action} failed: {status}"),
    }
}

/// Fetch the current session from `/api/auth/me`.
/// Returns `None` when signed out, on network failure, or on the server.
pub async fn fetch_current_session() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<SessionUser>().await.ok().map(Session::from)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an error string if the request fails or credentials are rejected.
pub async fn login(body: &LoginRequest) -> Result<Session, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("login", resp.status()));
        }
        let user: SessionUser = resp.json().await.map_err(|e| e.to_string())?;
        Ok(user.into())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err("not available on server".to_owned())
    }
}

/// End the session via `POST /api/auth/logout`. Failures are ignored: the
/// local session is already cleared by the time this runs.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post("/api/auth/logout").send().await {
            log::warn!("logout request failed: {e}");
        }
    }
}

/// Change the signed-in user's password via `POST /api/auth/change-password`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn change_password(body: &ChangePasswordRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/change-password")
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("change password", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err("not available on server".to_owned())
    }
}

/// Fetch one page of posts from `/api/posts?page=N`.
///
/// # Errors
///
/// Returns an error string if the request or JSON decoding fails.
pub async fn fetch_posts(page: u32) -> Result<PostPage, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&posts_endpoint(page))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("load posts", resp.status()));
        }
        resp.json::<PostPage>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = page;
        Err("not available on server".to_owned())
    }
}
