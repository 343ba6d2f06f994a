//! Recipe list/search state.
//!
//! The list holds whatever the service last returned for either trigger:
//! the unconditional load on first display or a user search. Filtering is
//! entirely server-side.

#[cfg(test)]
#[path = "recipe_list_test.rs"]
mod recipe_list_test;

use crate::net::api::RecipeApi;
use crate::net::types::{Recipe, SearchQuery};
use crate::state::sync::{self, Settled, Synced, ViewCell};

/// Recipes shown on the list page, in service order.
pub type RecipeList = Synced<Vec<Recipe>>;

/// Replace the list with every recipe.
pub async fn load_all(api: &dyn RecipeApi, list: &impl ViewCell<RecipeList>) -> Settled {
    sync::load(list, "list recipes", || api.list()).await
}

/// Replace the list with the service's matches for `query`.
pub async fn search(api: &dyn RecipeApi, list: &impl ViewCell<RecipeList>, query: &SearchQuery) -> Settled {
    sync::load(list, "search recipes", || api.search(query)).await
}

/// What the list page renders for the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListDisplay {
    /// Nothing has loaded yet. A failed first load stays here.
    Loading,
    /// The service returned no recipes.
    Empty,
    Recipes,
}

pub fn display(list: &RecipeList) -> ListDisplay {
    match list.value() {
        None => ListDisplay::Loading,
        Some(recipes) if recipes.is_empty() => ListDisplay::Empty,
        Some(_) => ListDisplay::Recipes,
    }
}
