//! Labeled link back to a prior route.

use leptos::prelude::*;

/// Plain anchor to `href`. Reachability of the target is the caller's concern.
#[component]
pub fn BackLink(#[prop(into)] label: String, #[prop(into)] href: String) -> impl IntoView {
    view! {
        <a href=href class="back-link">
            <span class="back-link__arrow" aria-hidden="true">"\u{2190}"</span>
            <span class="back-link__label">{label}</span>
        </a>
    }
}
