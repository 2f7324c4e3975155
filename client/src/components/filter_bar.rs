//! Category filter buttons above the snippet list.

#[cfg(test)]
#[path = "filter_bar_test.rs"]
mod filter_bar_test;

use leptos::prelude::*;

use crate::net::snippet_client::BoardHandle;
use crate::net::types::Category;

/// Filter choices in display order: "all" first, then each category.
fn filter_options() -> Vec<Option<Category>> {
    std::iter::once(None).chain(Category::ALL.into_iter().map(Some)).collect()
}

fn filter_label(filter: Option<Category>) -> &'static str {
    filter.map_or("Tous", Category::as_str)
}

fn filter_button_class(active: bool) -> &'static str {
    if active { "filter-bar__button filter-bar__button--active" } else { "filter-bar__button" }
}

/// One button per filter choice; the active one is highlighted.
#[component]
pub fn FilterBar() -> impl IntoView {
    let board = expect_context::<BoardHandle>();

    view! {
        <div class="filter-bar">
            {filter_options()
                .into_iter()
                .map(|option| {
                    let class = move || filter_button_class(board.state.with(|s| s.filter == option));
                    view! {
                        <button
                            class=class
                            type="button"
                            on:click=move |_| board.dispatch(|s| s.set_filter(option))
                        >
                            {filter_label(option)}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
