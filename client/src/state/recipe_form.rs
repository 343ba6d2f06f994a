//! Create/edit form state.
//!
//! DESIGN
//! ======
//! The route decides the mode: no id means create, an id means edit. In edit
//! mode the loaded recipe seeds the draft once; after that the draft belongs
//! to the user until submit.

#[cfg(test)]
#[path = "recipe_form_test.rs"]
mod recipe_form_test;

use crate::net::api::RecipeApi;
use crate::net::types::{Recipe, RecipeDraft, RecipeId};
use crate::state::sync::{self, MutationKind, Settled, Synced, ViewCell};

/// Which request the form's submit issues.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecipeId),
}

impl FormMode {
    /// Mode for the `id` route parameter, if the route has one.
    pub fn from_route(id: Option<String>) -> Self {
        match id {
            Some(id) if !id.is_empty() => Self::Edit(RecipeId::from(id)),
            _ => Self::Create,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Edit(_))
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Self::Create => "Create New Recipe",
            Self::Edit(_) => "Edit Recipe",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Create => "Create Recipe",
            Self::Edit(_) => "Update Recipe",
        }
    }
}

/// Fields of the form, as edited by the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Title,
    Ingredients,
    Instructions,
    Cuisine,
    DietaryPreferences,
    ImageUrl,
}

impl FormField {
    pub fn set(self, draft: &mut RecipeDraft, value: String) {
        match self {
            Self::Title => draft.title = value,
            Self::Ingredients => draft.ingredients = value,
            Self::Instructions => draft.instructions = value,
            Self::Cuisine => draft.cuisine = value,
            Self::DietaryPreferences => draft.dietary_preferences = value,
            Self::ImageUrl => draft.image_url = (!value.trim().is_empty()).then_some(value),
        }
    }

    pub fn get(self, draft: &RecipeDraft) -> String {
        match self {
            Self::Title => draft.title.clone(),
            Self::Ingredients => draft.ingredients.clone(),
            Self::Instructions => draft.instructions.clone(),
            Self::Cuisine => draft.cuisine.clone(),
            Self::DietaryPreferences => draft.dietary_preferences.clone(),
            Self::ImageUrl => draft.image_url.clone().unwrap_or_default(),
        }
    }
}

/// Load the recipe being edited and copy it into the draft.
pub async fn load_for_edit(
    api: &dyn RecipeApi,
    id: &RecipeId,
    source: &impl ViewCell<Synced<Recipe>>,
    draft: &impl ViewCell<RecipeDraft>,
) -> Settled {
    let settled = sync::load(source, "load recipe", || api.get(id)).await;
    if settled == Settled::Applied {
        if let Some(Some(loaded)) = source.with_state(|s| s.value().map(RecipeDraft::from)) {
            draft.update_state(|d| *d = loaded);
        }
    }
    settled
}

/// Create or update from `draft`, depending on `mode`. An update sends the
/// edits over the copy in `source`.
pub async fn submit(
    api: &dyn RecipeApi,
    mode: &FormMode,
    draft: &RecipeDraft,
    source: &impl ViewCell<Synced<Recipe>>,
) -> Settled {
    match mode {
        FormMode::Create => {
            sync::mutate(source, MutationKind::Create, move || async move { api.create(draft).await.map(Some) }).await
        }
        FormMode::Edit(id) => {
            let body = source
                .with_state(|s| draft.for_update(id, s.value()))
                .unwrap_or_else(|| draft.for_update(id, None));
            sync::mutate(source, MutationKind::Update, move || async move { api.update(id, &body).await.map(Some) }).await
        }
    }
}
