//! Card rendering one snippet with a copy-to-clipboard action.

use leptos::prelude::*;

use crate::net::snippet_client::BoardHandle;
use crate::net::types::Snippet;

/// A snippet's title, category badge, description, and verbatim code.
#[component]
pub fn SnippetCard(snippet: Snippet) -> impl IntoView {
    let board = expect_context::<BoardHandle>();
    let Snippet { title, description, category, code, .. } = snippet;
    let copy_text = code.clone();

    view! {
        <article class="snippet-card">
            <header class="snippet-card__header">
                <h2 class="snippet-card__title">
                    {title}
                    <span class="snippet-card__badge">{category.as_str()}</span>
                </h2>
                <button
                    class="snippet-card__copy"
                    type="button"
                    on:click=move |_| {
                        let text = copy_text.clone();
                        board.dispatch(move |s| s.request_copy(text));
                    }
                >
                    "📋 Copier"
                </button>
            </header>
            <p class="snippet-card__description">{description}</p>
            <pre class="snippet-card__code">{code}</pre>
        </article>
    }
}
