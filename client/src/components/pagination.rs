//! Page-number control for paginated widgets.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

/// Number of page buttons shown at once.
pub const PAGE_WINDOW: u32 = 5;

/// Page numbers to show around `current`, clamped to `1..=total`.
///
/// The window keeps `width` entries when `total` allows and stays centered
/// on `current` except near either end.
pub fn page_window(current: u32, total: u32, width: u32) -> Vec<u32> {
    let total = total.max(1);
    let width = width.clamp(1, total);
    let current = current.clamp(1, total);
    let half = width / 2;
    let start = current.saturating_sub(half).max(1).min(total - width + 1);
    (start..start + width).collect()
}

#[component]
pub fn Pagination(
    #[prop(into)] current: Signal<u32>,
    #[prop(into)] total: Signal<u32>,
    on_change: Callback<u32>,
) -> impl IntoView {
    let go = move |page: u32| {
        if page != current.get_untracked() {
            on_change.run(page);
        }
    };

    view! {
        <nav class="pagination" aria-label="Phân trang">
            <button
                class="btn pagination__step"
                disabled=move || current.get() <= 1
                on:click=move |_| go(current.get_untracked().saturating_sub(1).max(1))
            >
                "\u{2039}"
            </button>
            {move || {
                let now = current.get();
                page_window(now, total.get(), PAGE_WINDOW)
                    .into_iter()
                    .map(|page| {
                        let class = if page == now { "btn pagination__page pagination__page--current" } else { "btn pagination__page" };
                        view! {
                            <button class=class on:click=move |_| go(page)>
                                {page}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
            <button
                class="btn pagination__step"
                disabled=move || current.get() >= total.get()
                on:click=move |_| go((current.get_untracked() + 1).min(total.get_untracked().max(1)))
            >
                "\u{203a}"
            </button>
        </nav>
    }
}
