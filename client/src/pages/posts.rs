//! Public post list.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use leptos::prelude::*;

use crate::components::back_link::BackLink;
use crate::components::post_listing::PostListing;
use crate::routing::PUBLIC_HOME;

#[component]
pub fn PostsPage() -> impl IntoView {
    view! {
        <div class="public-page posts-page">
            <BackLink label="Go Back" href=PUBLIC_HOME/>
            <h1 class="page-title">"Bài viết"</h1>
            <PostListing/>
        </div>
    }
}
