//! Search form for the recipe list.

use leptos::prelude::*;

use crate::net::types::SearchQuery;

/// Keyword, cuisine and dietary preference inputs. Every field is optional;
/// submitting hands the current query to `on_search`.
#[component]
pub fn SearchBar(on_search: Callback<SearchQuery>, #[prop(into)] busy: Signal<bool>) -> impl IntoView {
    let keyword = RwSignal::new(String::new());
    let cuisine = RwSignal::new(String::new());
    let dietary = RwSignal::new(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_search.run(SearchQuery {
            keyword: keyword.get_untracked(),
            cuisine: cuisine.get_untracked(),
            dietary_preference: dietary.get_untracked(),
        });
    };

    view! {
        <form class="search-bar" on:submit=submit>
            <input
                class="search-bar__input"
                type="text"
                placeholder="Search by keyword"
                prop:value=move || keyword.get()
                on:input=move |ev| keyword.set(event_target_value(&ev))
            />
            <input
                class="search-bar__input"
                type="text"
                placeholder="Cuisine"
                prop:value=move || cuisine.get()
                on:input=move |ev| cuisine.set(event_target_value(&ev))
            />
            <input
                class="search-bar__input"
                type="text"
                placeholder="Dietary Preference"
                prop:value=move || dietary.get()
                on:input=move |ev| dietary.set(event_target_value(&ev))
            />
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                "Search"
            </button>
        </form>
    }
}
