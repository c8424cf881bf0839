use super::*;

#[test]
fn session_user_becomes_authenticated_session() {
    let session: Session = SessionUser { name: "Phạm D".to_owned(), role: Role::Staff }.into();
    assert!(session.authenticated);
    assert_eq!(session.identity, "Phạm D");
    assert_eq!(session.role, Role::Staff);
}

#[test]
fn session_user_parses_from_json() {
    let user: SessionUser = serde_json::from_str(r#"{"name":"Admin","role":"admin"}"#).unwrap();
    assert_eq!(user.role, Role::Admin);
}

#[test]
fn post_page_parses_from_json() {
    let raw = r#"{"items":[{"id":"p1","title":"Giờ mở cửa","author":"admin","created_at":"2024-05-01T08:00:00Z"}],"page":2,"total_pages":5}"#;
    let page: PostPage = serde_json::from_str(raw).unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.page, 2);
    assert_eq!(page.total_pages, 5);
}

#[test]
fn change_password_request_field_names() {
    let body = ChangePasswordRequest { current_password: "old".to_owned(), new_password: "newpass".to_owned() };
    assert_eq!(
        serde_json::to_value(body).unwrap(),
        serde_json::json!({ "current_password": "old", "new_password": "newpass" })
    );
}

#[test]
fn default_post_page_is_first_of_one() {
    let page = PostPage::default();
    assert_eq!((page.page, page.total_pages), (1, 1));
    assert!(page.items.is_empty());
}
