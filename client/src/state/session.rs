//! Session state for the current console user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth collaborator owns the session; this crate only reads it. Route
//! guards and the session menu pull from one `RwSignal<SessionState>`
//! provided at the application root and hydrated once at startup.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::routing::{AUTH_ENTRY, RequiredRole};

/// Role carried by a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Staff,
    #[default]
    Guest,
}

impl Role {
    /// Wire name, matching the serde encoding.
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Staff => "staff",
            Self::Guest => "guest",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Quản trị viên",
            Self::Staff => "Nhân viên",
            Self::Guest => "Khách",
        }
    }
}

/// Identity and role of the browser user as reported by the auth collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub identity: String,
    pub role: Role,
    pub authenticated: bool,
}

impl Session {
    /// Unauthenticated placeholder used before login and after logout.
    pub fn guest() -> Self {
        Self { identity: String::new(), role: Role::Guest, authenticated: false }
    }

    /// Whether this session may enter an area guarded by `required`.
    ///
    /// Roles do not nest: an admin session does not satisfy a staff area.
    pub fn satisfies(&self, required: RequiredRole) -> bool {
        match required {
            RequiredRole::None => true,
            RequiredRole::Admin => self.authenticated && self.role == Role::Admin,
            RequiredRole::Staff => self.authenticated && self.role == Role::Staff,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::guest()
    }
}

/// Session plus hydration status.
///
/// `loading` starts `true` on both the server render and the first client
/// render so hydration markup matches; it flips once the collaborator answers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub session: Session,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { session: Session::guest(), loading: true }
    }
}

impl SessionState {
    /// State after the collaborator has answered; `None` means signed out.
    pub fn hydrated(session: Option<Session>) -> Self {
        Self { session: session.unwrap_or_default(), loading: false }
    }

    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.session.authenticated
    }

    pub fn clear(&mut self) {
        self.session = Session::guest();
        self.loading = false;
    }
}

/// Clear the session and return where the browser must go next.
///
/// Calling this on an already-cleared session is a no-op that still yields
/// the auth entry, so a stale logout click just redirects.
pub fn logout_transition(state: &mut SessionState) -> &'static str {
    state.clear();
    AUTH_ENTRY
}
