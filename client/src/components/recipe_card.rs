//! Card component for one entry on the recipe list.
//!
//! DESIGN
//! ======
//! Shows the summary fields only; the detail page owns comments and actions.

use leptos::prelude::*;

use crate::net::types::Recipe;
use crate::util::format::{format_rating, image_src};
use crate::util::links;

/// A recipe summary with a link to its detail page.
#[component]
pub fn RecipeCard(recipe: Recipe) -> impl IntoView {
    let href = links::detail(&recipe.id);
    let src = image_src(recipe.image_url.as_deref());
    let rating = format_rating(recipe.average_rating);

    view! {
        <div class="recipe-card">
            <img class="recipe-card__image" src=src alt=recipe.title.clone() />
            <div class="recipe-card__body">
                <h3 class="recipe-card__title">{recipe.title}</h3>
                <p class="recipe-card__meta">
                    <strong>"Cuisine: "</strong>
                    {recipe.cuisine}
                </p>
                <p class="recipe-card__meta">
                    <strong>"Dietary Preferences: "</strong>
                    {recipe.dietary_preferences}
                </p>
                <p class="recipe-card__rating">
                    <strong>"Average Rating: "</strong>
                    {rating}
                </p>
                <a class="btn btn--primary" href=href>
                    "View Details"
                </a>
            </div>
        </div>
    }
}
