//! Paginated post table widget.
//!
//! DESIGN
//! ======
//! The widget owns its page number and fetch status so it can be mounted
//! verbatim on the public posts page or inside any shell. Loading and error
//! rows are its own; the surrounding layout never waits on the fetch.

#[cfg(test)]
#[path = "post_listing_test.rs"]
mod post_listing_test;

use leptos::prelude::*;

use crate::components::pagination::Pagination;
use crate::net::types::{Post, PostPage};
use crate::state::notify::Notifier;

/// Fetch status plus the last page that loaded successfully.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostListingState {
    pub data: PostPage,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for PostListingState {
    fn default() -> Self {
        Self { data: PostPage::default(), loading: true, error: None }
    }
}

impl PostListingState {
    /// Fold a fetch result in. Failures keep the previous rows visible.
    pub fn apply(&mut self, result: Result<PostPage, String>) {
        self.loading = false;
        match result {
            Ok(page) => {
                self.data = page;
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
    }
}

/// Date part of an ISO-8601 timestamp.
pub fn display_date(raw: &str) -> &str {
    raw.get(..10).unwrap_or(raw)
}

#[component]
pub fn PostListing() -> impl IntoView {
    let notifier = use_context::<Notifier>();
    let page = RwSignal::new(1_u32);
    let listing = RwSignal::new(PostListingState::default());

    Effect::new(move || {
        let requested = page.get();
        listing.update(|l| l.loading = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_posts(requested).await;
            if page.get_untracked() != requested {
                return;
            }
            if let Err(e) = &result {
                crate::state::notify::report(notifier, format!("Không tải được bài viết: {e}"), crate::state::notify::Severity::Error);
            }
            listing.update(|l| l.apply(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (requested, notifier);
    });

    let on_change = Callback::new(move |next: u32| page.set(next));
    let total = Signal::derive(move || listing.with(|l| l.data.total_pages.max(1)));

    view! {
        <section class="post-listing">
            <PostTable listing=listing/>
            <Pagination current=page total=total on_change=on_change/>
        </section>
    }
}

#[component]
fn PostTable(listing: RwSignal<PostListingState>) -> impl IntoView {
    let rows = move || {
        let state = listing.get();
        if state.loading && state.data.items.is_empty() {
            return view! { <tr class="post-table__status"><td colspan="3">"Đang tải..."</td></tr> }.into_any();
        }
        if state.data.items.is_empty() {
            let message = state.error.unwrap_or_else(|| "Chưa có bài viết nào.".to_owned());
            return view! { <tr class="post-table__status"><td colspan="3">{message}</td></tr> }.into_any();
        }
        state
            .data
            .items
            .into_iter()
            .map(|post: Post| {
                let date = display_date(&post.created_at).to_owned();
                view! {
                    <tr class="post-table__row">
                        <td class="post-table__title">{post.title}</td>
                        <td class="post-table__author">{post.author}</td>
                        <td class="post-table__date">{date}</td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
            .into_any()
    };

    view! {
        <table class="post-table">
            <thead>
                <tr>
                    <th>"Tiêu đề"</th>
                    <th>"Tác giả"</th>
                    <th>"Ngày đăng"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
        <Show when=move || listing.with(|l| l.error.is_some() && !l.data.items.is_empty())>
            <p class="post-listing__error">{move || listing.with(|l| l.error.clone().unwrap_or_default())}</p>
        </Show>
    }
}
