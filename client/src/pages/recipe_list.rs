//! Recipe list page with server-side search.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads every recipe once on mount. A search replaces the list with the
//! service's matches; the page never filters locally. Failures are only
//! logged: the page keeps showing whatever it showed before.

use leptos::prelude::*;

use crate::components::recipe_card::RecipeCard;
use crate::components::search_bar::SearchBar;
use crate::net::api::SharedApi;
use crate::net::types::SearchQuery;
use crate::pages::spawn_request;
use crate::state::recipe_list::{self, ListDisplay, RecipeList};

#[component]
pub fn RecipeListPage() -> impl IntoView {
    let api = expect_context::<SharedApi>();
    let list = RwSignal::new(RecipeList::new());

    let load_api = api.clone();
    Effect::new(move || {
        let api = load_api.clone();
        spawn_request(async move {
            recipe_list::load_all(&*api, &list).await;
        });
    });

    let on_search = Callback::new(move |query: SearchQuery| {
        let api = api.clone();
        spawn_request(async move {
            recipe_list::search(&*api, &list, &query).await;
        });
    });

    let busy = Signal::derive(move || list.with(RecipeList::is_loading));

    view! {
        <div class="recipe-list-page">
            <h1>"Recipes"</h1>
            <SearchBar on_search=on_search busy=busy />
            <Show
                when=move || list.with(recipe_list::display) != ListDisplay::Loading
                fallback=|| view! { <p>"Loading..."</p> }
            >
                <Show
                    when=move || list.with(recipe_list::display) == ListDisplay::Recipes
                    fallback=|| view! { <p>"No recipes found."</p> }
                >
                    <div class="recipe-list-page__grid">
                        {move || {
                            list.with(|l| l.value().cloned().unwrap_or_default())
                                .into_iter()
                                .map(|recipe| view! { <RecipeCard recipe=recipe /> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
        </div>
    }
}
