//! Create/edit recipe page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted for both `/recipes/new` and `/recipes/:id/edit`. The presence of
//! the `id` parameter picks the mode; a successful submit returns to the
//! list. Required fields are enforced by the browser only.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::api::SharedApi;
use crate::net::types::{Recipe, RecipeDraft};
use crate::pages::spawn_request;
use crate::state::recipe_form::{self, FormField, FormMode};
use crate::state::sync::{MutationKind, Synced};
use crate::util::links;

#[component]
pub fn RecipeFormPage() -> impl IntoView {
    let api = expect_context::<SharedApi>();
    let params = use_params_map();
    let navigate = use_navigate();

    let mode = Memo::new(move |_| FormMode::from_route(params.read().get("id")));
    let source = RwSignal::new(Synced::<Recipe>::new());
    let draft = RwSignal::new(RecipeDraft::default());
    let saved = RwSignal::new(false);

    let load_api = api.clone();
    Effect::new(move || {
        let FormMode::Edit(id) = mode.get() else {
            return;
        };
        let api = load_api.clone();
        spawn_request(async move {
            recipe_form::load_for_edit(&*api, &id, &source, &draft).await;
        });
    });

    Effect::new(move || {
        if saved.get() {
            navigate(links::RECIPES, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let mode = mode.get_untracked();
        let body = draft.get_untracked();
        let api = api.clone();
        spawn_request(async move {
            if recipe_form::submit(&*api, &mode, &body, &source).await.succeeded() {
                saved.try_set(true);
            }
        });
    };

    let submitting = move || source.with(|s| s.is_pending(MutationKind::Create) || s.is_pending(MutationKind::Update));

    view! {
        <div class="recipe-form-page">
            <h1>{move || mode.with(FormMode::heading)}</h1>
            <form class="recipe-form" on:submit=on_submit>
                <FormInput label="Title" field=FormField::Title draft=draft required=true />
                <FormInput label="Ingredients" field=FormField::Ingredients draft=draft required=true multiline=true />
                <FormInput label="Instructions" field=FormField::Instructions draft=draft required=true multiline=true />
                <FormInput label="Cuisine" field=FormField::Cuisine draft=draft />
                <FormInput label="Dietary Preferences" field=FormField::DietaryPreferences draft=draft />
                <FormInput label="Image URL" field=FormField::ImageUrl draft=draft />
                <button class="btn btn--primary" type="submit" disabled=submitting>
                    {move || mode.with(FormMode::submit_label)}
                </button>
            </form>
        </div>
    }
}

/// One labelled input bound to a draft field.
#[component]
fn FormInput(
    label: &'static str,
    field: FormField,
    draft: RwSignal<RecipeDraft>,
    #[prop(optional)] required: bool,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let value = move || draft.with(|d| field.get(d));
    let on_input = move |ev: leptos::ev::Event| {
        let next = event_target_value(&ev);
        draft.update(|d| field.set(d, next));
    };

    view! {
        <label class="recipe-form__field">
            <span class="recipe-form__label">{label}</span>
            {if multiline {
                view! {
                    <textarea required=required prop:value=value on:input=on_input></textarea>
                }
                    .into_any()
            } else {
                view! { <input type="text" required=required prop:value=value on:input=on_input /> }.into_any()
            }}
        </label>
    }
}
