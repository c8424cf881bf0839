//! Route groups and the path dispatcher.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router mounts one layout per group. Before a protected layout renders
//! anything it asks `dispatch` what to do with the current (path, session)
//! pair, so every access decision flows through one pure function.
//!
//! INVARIANTS
//! ==========
//! - Exactly one outcome per (path, session); unmatched paths are public.
//! - Prefixes match on segment boundaries and the longest match wins.
//! - Protected content is never mounted while the session is unknown.


pub mod nav;

use crate::state::session::{Role, SessionState};
use nav::{ADMIN_NAV, NavigationItem, STAFF_NAV};

/// Where unauthorized navigation is sent.
pub const AUTH_ENTRY: &str = "/auth";

/// Public landing route.
pub const PUBLIC_HOME: &str = "/";

/// Access requirement attached to a route group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequiredRole {
    #[default]
    None,
    Admin,
    Staff,
}

/// Which chrome wraps the pages of a group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutKind {
    Public,
    Protected(Role),
}

impl LayoutKind {
    /// Role whose shell wraps the group, `None` for the public layout.
    pub fn role(self) -> Option<Role> {
        match self {
            Self::Public => None,
            Self::Protected(role) => Some(role),
        }
    }
}

/// Static description of one route group.
#[derive(Debug, PartialEq, Eq)]
pub struct RouteGroup {
    pub path_prefix: &'static str,
    pub required_role: RequiredRole,
    pub layout: LayoutKind,
    pub nav: &'static [NavigationItem],
    /// Landing page of the group, also the sidebar's overview item.
    pub home: &'static str,
}

impl RouteGroup {
    pub fn profile_route(&self) -> String {
        format!("{}/profile", self.path_prefix)
    }
}

pub static ADMIN_GROUP: RouteGroup = RouteGroup {
    path_prefix: "/admin",
    required_role: RequiredRole::Admin,
    layout: LayoutKind::Protected(Role::Admin),
    nav: ADMIN_NAV,
    home: "/admin",
};

pub static STAFF_GROUP: RouteGroup = RouteGroup {
    path_prefix: "/staff",
    required_role: RequiredRole::Staff,
    layout: LayoutKind::Protected(Role::Staff),
    nav: STAFF_NAV,
    home: "/staff",
};

/// Every protected group known to the router.
pub static ROUTE_GROUPS: [&RouteGroup; 2] = [&ADMIN_GROUP, &STAFF_GROUP];

/// Outcome of dispatching a path for a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// No group claims the path; render without a shell.
    Public,
    /// A group claims the path but the session has not hydrated yet.
    Pending(&'static RouteGroup),
    /// Render the group's shell around the page.
    Protected(&'static RouteGroup),
    /// Do not render; navigate to the target instead.
    Redirect(&'static str),
}

/// Errors found when validating a route table.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RouteTableError {
    #[error("route prefix is empty")]
    EmptyPrefix,
    #[error("route prefix `{0}` must start with `/`")]
    NotAbsolute(&'static str),
    #[error("route prefix `{0}` must not end with `/`")]
    TrailingSlash(&'static str),
    #[error("route prefix `{0}` is declared more than once")]
    Duplicate(&'static str),
}

/// Strip query string and fragment from a request path.
fn path_only(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

/// Segment-boundary prefix test: `/admin` matches `/admin/x` but not `/administrator`.
pub fn match_prefix(prefix: &str, path: &str) -> bool {
    let path = path_only(path);
    if prefix == "/" {
        return path.starts_with('/');
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Longest-prefix group for `path`, if any.
pub fn resolve_group(groups: &[&'static RouteGroup], path: &str) -> Option<&'static RouteGroup> {
    groups
        .iter()
        .copied()
        .filter(|g| match_prefix(g.path_prefix, path))
        .max_by_key(|g| g.path_prefix.len())
}

/// Decide how to render `path` for `session`. Pure and deterministic.
pub fn dispatch(groups: &[&'static RouteGroup], path: &str, session: &SessionState) -> Dispatch {
    let Some(group) = resolve_group(groups, path) else {
        return Dispatch::Public;
    };
    if group.required_role == RequiredRole::None {
        return Dispatch::Protected(group);
    }
    if session.loading {
        return Dispatch::Pending(group);
    }
    if session.session.satisfies(group.required_role) {
        Dispatch::Protected(group)
    } else {
        Dispatch::Redirect(AUTH_ENTRY)
    }
}

/// Check a route table for malformed or repeated prefixes.
///
/// # Errors
///
/// Returns the first problem found, in table order.
pub fn validate_groups(groups: &[&'static RouteGroup]) -> Result<(), RouteTableError> {
    for (i, group) in groups.iter().enumerate() {
        let prefix = group.path_prefix;
        if prefix.is_empty() {
            return Err(RouteTableError::EmptyPrefix);
        }
        if !prefix.starts_with('/') {
            return Err(RouteTableError::NotAbsolute(prefix));
        }
        if prefix.len() > 1 && prefix.ends_with('/') {
            return Err(RouteTableError::TrailingSlash(prefix));
        }
        if groups[..i].iter().any(|g| g.path_prefix == prefix) {
            return Err(RouteTableError::Duplicate(prefix));
        }
    }
    Ok(())
}

/// Landing route right after sign-in: the home of the group laid out for `role`.
pub fn home_for(role: Role) -> &'static str {
    ROUTE_GROUPS
        .iter()
        .find(|g| g.layout.role() == Some(role))
        .map_or(PUBLIC_HOME, |g| g.home)
}
