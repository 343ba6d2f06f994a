//! Client route paths.
//!
//! Only the recipe identifier travels between pages, and only through these
//! paths.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

use crate::net::types::RecipeId;

pub const HOME: &str = "/";
pub const RECIPES: &str = "/recipes";
pub const NEW_RECIPE: &str = "/recipes/new";

pub fn detail(id: &RecipeId) -> String {
    format!("{RECIPES}/{id}")
}

pub fn edit(id: &RecipeId) -> String {
    format!("{RECIPES}/{id}/edit")
}
