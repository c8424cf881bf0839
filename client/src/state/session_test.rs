use super::*;

fn admin() -> Session {
    Session { identity: "Nguyễn Văn A".to_owned(), role: Role::Admin, authenticated: true }
}

fn staff() -> Session {
    Session { identity: "Trần Thị B".to_owned(), role: Role::Staff, authenticated: true }
}

// =============================================================
// Session
// =============================================================

#[test]
fn guest_is_unauthenticated() {
    let guest = Session::guest();
    assert!(!guest.authenticated);
    assert_eq!(guest.role, Role::Guest);
    assert!(guest.identity.is_empty());
}

#[test]
fn satisfies_none_for_everyone() {
    assert!(Session::guest().satisfies(RequiredRole::None));
    assert!(admin().satisfies(RequiredRole::None));
}

#[test]
fn admin_satisfies_only_admin_area() {
    assert!(admin().satisfies(RequiredRole::Admin));
    assert!(!admin().satisfies(RequiredRole::Staff));
}

#[test]
fn staff_satisfies_only_staff_area() {
    assert!(staff().satisfies(RequiredRole::Staff));
    assert!(!staff().satisfies(RequiredRole::Admin));
}

#[test]
fn role_without_authentication_is_denied() {
    let session = Session { authenticated: false, ..admin() };
    assert!(!session.satisfies(RequiredRole::Admin));
}

#[test]
fn role_deserializes_snake_case() {
    let role: Role = serde_json::from_str("\"staff\"").unwrap();
    assert_eq!(role, Role::Staff);
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn default_state_is_loading_guest() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn hydrated_none_is_signed_out() {
    let state = SessionState::hydrated(None);
    assert!(!state.loading);
    assert_eq!(state.session, Session::guest());
}

#[test]
fn hydrated_some_is_authenticated() {
    let state = SessionState::hydrated(Some(admin()));
    assert!(state.is_authenticated());
}

#[test]
fn logout_clears_then_targets_auth_entry() {
    let mut state = SessionState::hydrated(Some(staff()));
    let target = logout_transition(&mut state);
    assert!(!state.session.authenticated);
    assert_eq!(state.session.role, Role::Guest);
    assert_eq!(target, "/auth");
}

#[test]
fn logout_on_stale_session_still_redirects() {
    let mut state = SessionState::hydrated(None);
    assert_eq!(logout_transition(&mut state), "/auth");
    assert_eq!(logout_transition(&mut state), "/auth");
    assert!(!state.loading);
}

#[test]
fn role_attr_matches_wire_name() {
    for role in [Role::Admin, Role::Staff, Role::Guest] {
        let wire = serde_json::to_string(&role).unwrap();
        assert_eq!(wire, format!("\"{}\"", role.as_attr()));
    }
}
