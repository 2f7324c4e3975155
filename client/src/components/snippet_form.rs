//! Form for drafting and submitting a new snippet.

use leptos::prelude::*;

use crate::net::snippet_client::BoardHandle;
use crate::net::types::Category;
use crate::state::snippets::{DraftField, SnippetBoardState};

/// Draft form. Inputs merge into board state on every keystroke; submit
/// validates and posts through the board handle.
#[component]
pub fn SnippetForm() -> impl IntoView {
    let board = expect_context::<BoardHandle>();

    let value_of = move |field: DraftField| move || board.state.with(|s| s.draft.get(field).to_owned());
    let set_field = move |field: DraftField, value: String| {
        board.update(|s| s.update_draft_field(field, value));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        board.dispatch(SnippetBoardState::submit_draft);
    };
    let pending = move || board.state.with(|s| s.create_pending);

    view! {
        <form class="snippet-form" on:submit=on_submit>
            <div class="snippet-form__grid">
                <input
                    class="snippet-form__input"
                    type="text"
                    name="title"
                    placeholder="Titre"
                    prop:value=value_of(DraftField::Title)
                    on:input=move |ev| set_field(DraftField::Title, event_target_value(&ev))
                />
                <input
                    class="snippet-form__input"
                    type="text"
                    name="description"
                    placeholder="Description"
                    prop:value=value_of(DraftField::Description)
                    on:input=move |ev| set_field(DraftField::Description, event_target_value(&ev))
                />
                <select
                    class="snippet-form__input"
                    name="category"
                    prop:value=value_of(DraftField::Category)
                    on:change=move |ev| set_field(DraftField::Category, event_target_value(&ev))
                >
                    <option value="">"Choisir catégorie"</option>
                    {Category::ALL
                        .into_iter()
                        .map(|c| view! { <option value=c.as_str()>{c.as_str()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </div>
            <textarea
                class="snippet-form__code"
                name="code"
                placeholder="Ton code ici..."
                rows="6"
                prop:value=value_of(DraftField::Code)
                on:input=move |ev| set_field(DraftField::Code, event_target_value(&ev))
            ></textarea>
            <button class="btn btn--primary" type="submit" disabled=pending>
                "➕ Ajouter"
            </button>
        </form>
    }
}
