//! Snippet board page: draft form, filter bar, and paginated list.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It triggers the initial load once hydrated and
//! lays out the board components, which share the `BoardHandle` context.

use leptos::prelude::*;

use crate::components::filter_bar::FilterBar;
use crate::components::notification_toast::NotificationToast;
use crate::components::snippet_form::SnippetForm;
use crate::components::snippet_list::SnippetList;
use crate::net::snippet_client::BoardHandle;
use crate::state::snippets::SnippetBoardState;

/// Snippet board page.
#[component]
pub fn SnippetBoardPage() -> impl IntoView {
    let board = expect_context::<BoardHandle>();

    // Effects only run in the browser, so the initial fetch is client-side.
    Effect::new(move |_| {
        board.dispatch(SnippetBoardState::mount);
    });

    view! {
        <div class="snippet-board">
            <NotificationToast/>
            <h1 class="snippet-board__title">"💡 1Fonction - Snippets Hub"</h1>
            <SnippetForm/>
            <FilterBar/>
            <SnippetList/>
        </div>
    }
}
