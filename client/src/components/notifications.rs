//! Toast stack anchored to the bottom-right corner of a shell.

use leptos::prelude::*;

use crate::state::notify::{Notification, Notifier};

#[component]
pub fn NotificationSurface() -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    let queue = notifier.queue();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || queue.get().items
                key=|note| note.id
                children=move |note: Notification| {
                    let id = note.id;
                    view! {
                        <div class=format!("toast {}", note.severity.css_modifier())>
                            <span class="toast__message">{note.message}</span>
                            <button class="toast__close" title="Đóng" on:click=move |_| notifier.dismiss(id)>
                                "\u{00d7}"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
