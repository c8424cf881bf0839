//! DTOs exchanged with the auth and post endpoints.
//!
//! DESIGN
//! ======
//! Wire shapes stay separate from `state::session` so a backend rename does
//! not ripple into route guards.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::session::{Role, Session};

/// Body of `GET /api/auth/me` and `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    pub role: Role,
}

impl From<SessionUser> for Session {
    fn from(user: SessionUser) -> Self {
        Self { identity: user.name, role: user.role, authenticated: true }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// A public post row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub author: String,
    /// ISO-8601 timestamp as sent by the server.
    pub created_at: String,
}

/// One page of posts. `page` is 1-based.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPage {
    pub items: Vec<Post>,
    pub page: u32,
    pub total_pages: u32,
}

impl Default for PostPage {
    fn default() -> Self {
        Self { items: Vec::new(), page: 1, total_pages: 1 }
    }
}
