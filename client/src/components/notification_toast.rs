//! Floating toast for the board's live notification.

use leptos::prelude::*;

use crate::net::snippet_client::BoardHandle;

/// Renders the current notification, if any. Clearing is timer-driven.
#[component]
pub fn NotificationToast() -> impl IntoView {
    let board = expect_context::<BoardHandle>();

    move || {
        board.state.with(|s| {
            s.notification.as_ref().map(|note| {
                let class = note.css_class();
                let message = note.message.clone();
                view! {
                    <div class=class role="status" aria-live="polite">
                        {message}
                    </div>
                }
            })
        })
    }
}
