//! Recipe detail state: one recipe, its comments, and the actions on it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The recipe and its comments are separate resources with separate loads.
//! Rating, sharing and deleting act on the recipe cell; commenting acts on
//! the comment cell, so a slow comment post never blocks a rating.

#[cfg(test)]
#[path = "recipe_detail_test.rs"]
mod recipe_detail_test;

use crate::net::api::RecipeApi;
use crate::net::types::{Comment, Rating, Recipe, RecipeId};
use crate::state::sync::{self, MutationKind, Settled, Synced, ViewCell};

pub type RecipeCell = Synced<Recipe>;
pub type CommentsCell = Synced<Vec<Comment>>;

/// Share targets offered on the detail page. Passed to the service verbatim.
pub const SHARE_METHODS: [&str; 3] = ["Facebook", "Twitter", "Email"];

pub async fn load_recipe(api: &dyn RecipeApi, id: &RecipeId, recipe: &impl ViewCell<RecipeCell>) -> Settled {
    sync::load(recipe, "load recipe", || api.get(id)).await
}

pub async fn load_comments(api: &dyn RecipeApi, id: &RecipeId, comments: &impl ViewCell<CommentsCell>) -> Settled {
    sync::load(comments, "load comments", || api.list_comments(id)).await
}

/// Rate the recipe; the copy is replaced with the service's recomputed one.
pub async fn submit_rating(
    api: &dyn RecipeApi,
    id: &RecipeId,
    rating: Rating,
    recipe: &impl ViewCell<RecipeCell>,
) -> Settled {
    sync::mutate(recipe, MutationKind::Rate, move || async move { api.rate(id, rating).await.map(Some) }).await
}

/// Post a comment; the comment list is replaced with the service's.
pub async fn submit_comment(
    api: &dyn RecipeApi,
    id: &RecipeId,
    content: &str,
    comments: &impl ViewCell<CommentsCell>,
) -> Settled {
    sync::mutate(comments, MutationKind::Comment, move || async move {
        match api.add_comment(id, content).await {
            // A recipe body without embedded comments cannot be right after
            // an append; read the list instead of wiping it.
            Ok(updated) if updated.comments.is_empty() => api.list_comments(id).await.map(Some),
            Ok(updated) => Ok(Some(updated.comments)),
            Err(err) => Err(err),
        }
    })
    .await
}

/// Notify the service of a share. Returns the acknowledgment text to flash
/// on success; local recipe data is never touched.
pub async fn share(
    api: &dyn RecipeApi,
    id: &RecipeId,
    method: &str,
    recipe: &impl ViewCell<RecipeCell>,
) -> Option<String> {
    let mut message = None;
    let slot = &mut message;
    let settled = sync::mutate(recipe, MutationKind::Share, move || async move {
        api.share(id, method).await.map(|ack| {
            *slot = ack.message;
            None
        })
    })
    .await;
    settled
        .succeeded()
        .then(|| message.unwrap_or_else(|| share_ack_message(method)))
}

/// Delete the recipe. On success the local copy is cleared and the caller
/// should navigate away.
pub async fn delete(api: &dyn RecipeApi, id: &RecipeId, recipe: &impl ViewCell<RecipeCell>) -> Settled {
    sync::mutate(recipe, MutationKind::Delete, move || async move { api.delete(id).await.map(|()| None) }).await
}

/// Rating picked in the selector. The blank placeholder option and anything
/// outside 0–5 pick nothing.
pub fn rating_choice(raw: &str) -> Option<Rating> {
    raw.trim().parse().ok().and_then(Rating::new)
}

pub fn share_ack_message(method: &str) -> String {
    format!("Recipe shared via {method}")
}
