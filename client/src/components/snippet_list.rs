//! Paginated snippet list with previous/next controls.

#[cfg(test)]
#[path = "snippet_list_test.rs"]
mod snippet_list_test;

use leptos::prelude::*;

use crate::components::snippet_card::SnippetCard;
use crate::net::snippet_client::BoardHandle;

fn page_label(page: usize, total_pages: usize) -> String {
    format!("Page {page} / {}", total_pages.max(1))
}

/// Current page of snippets, or an empty-state message.
#[component]
pub fn SnippetList() -> impl IntoView {
    let board = expect_context::<BoardHandle>();

    let is_empty = move || board.state.with(|s| s.snippets.is_empty());
    let cards = move || {
        board.state.with(|s| {
            s.visible_snippets()
                .iter()
                .cloned()
                .map(|snippet| view! { <SnippetCard snippet/> })
                .collect::<Vec<_>>()
        })
    };
    let label = move || board.state.with(|s| page_label(s.page, s.total_pages()));
    let no_previous = move || board.state.with(|s| !s.has_previous_page());
    let no_next = move || board.state.with(|s| !s.has_next_page());

    view! {
        <section class="snippet-list">
            <Show
                when=move || !is_empty()
                fallback=|| view! { <p class="snippet-list__empty">"Aucun snippet trouvé."</p> }
            >
                <div class="snippet-list__cards">{cards}</div>
                <nav class="pager">
                    <button
                        class="btn pager__button"
                        type="button"
                        disabled=no_previous
                        on:click=move |_| board.update(|s| s.go_to_page(-1))
                    >
                        "Précédent"
                    </button>
                    <span class="pager__label">{label}</span>
                    <button
                        class="btn pager__button"
                        type="button"
                        disabled=no_next
                        on:click=move |_| board.update(|s| s.go_to_page(1))
                    >
                        "Suivant"
                    </button>
                </nav>
            </Show>
        </section>
    }
}
