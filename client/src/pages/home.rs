//! Public landing page.

use leptos::prelude::*;

use crate::routing::AUTH_ENTRY;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="public-page home-page">
            <section class="home-page__hero">
                <h1>"Hệ thống quản lý bãi đỗ xe"</h1>
                <p>"Theo dõi bãi xe, vé gửi xe và xe ra vào trên một bảng điều khiển."</p>
                <div class="home-page__actions">
                    <a href=AUTH_ENTRY class="btn btn--primary">"Đăng nhập"</a>
                    <a href="/posts" class="btn">"Xem bài viết"</a>
                </div>
            </section>
            <footer class="public-footer">"© Parking Console"</footer>
        </div>
    }
}
