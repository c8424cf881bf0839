use leptos::prelude::*;

use crate::components::back_link::BackLink;
use crate::routing::PUBLIC_HOME;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Không tìm thấy trang."</p>
            <BackLink label="Go Back" href=PUBLIC_HOME/>
        </div>
    }
}
