#![cfg(feature = "ssr")]

use super::*;

fn render() -> String {
    let owner = Owner::new_root(None);
    owner.with(|| view! { <PostsPage/> }.to_html())
}

#[test]
fn posts_page_has_back_link_to_home() {
    let html = render();
    assert!(html.contains("Go Back"));
    assert!(html.contains(r#"href="/""#));
}

#[test]
fn posts_page_renders_table_and_pagination() {
    let html = render();
    assert!(html.contains("post-table"));
    assert!(html.contains("pagination"));
}

#[test]
fn posts_page_renders_without_shell_chrome() {
    let html = render();
    assert!(!html.contains("navbar"));
    assert!(!html.contains("sidebar"));
    assert!(!html.contains("session-menu"));
}
