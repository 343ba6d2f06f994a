//! Recipe detail page: rating, comments, sharing, edit and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route id keys two independent loads, one for the recipe and one for
//! its comments. Each action settles into the cell it changes; a control is
//! disabled while its own request is in flight.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::api::SharedApi;
use crate::net::types::{Rating, Recipe, RecipeId};
use crate::pages::spawn_request;
use crate::state::recipe_detail::{self, CommentsCell, RecipeCell, SHARE_METHODS, rating_choice};
use crate::state::sync::MutationKind;
use crate::util::format::{comment_time, format_rating, image_src, rating_option_label};
use crate::util::links;

#[cfg(feature = "hydrate")]
const SHARE_NOTICE_SECS: u64 = 3;

#[component]
pub fn RecipeDetailPage() -> impl IntoView {
    let api = expect_context::<SharedApi>();
    let params = use_params_map();
    let navigate = use_navigate();

    let recipe = RwSignal::new(RecipeCell::new());
    let comments = RwSignal::new(CommentsCell::new());
    let rating = RwSignal::new(None::<Rating>);
    let comment_text = RwSignal::new(String::new());
    let share_notice = RwSignal::new(None::<String>);
    let deleted = RwSignal::new(false);

    let current_id = move || params.with_untracked(|p| p.get("id")).map(RecipeId::from);

    // Recipe and comments load independently on entry.
    let load_api = api.clone();
    Effect::new(move || {
        let Some(id) = params.read().get("id").map(RecipeId::from) else {
            return;
        };
        let api = load_api.clone();
        let recipe_id = id.clone();
        spawn_request(async move {
            recipe_detail::load_recipe(&*api, &recipe_id, &recipe).await;
        });
        let api = load_api.clone();
        spawn_request(async move {
            recipe_detail::load_comments(&*api, &id, &comments).await;
        });
    });

    Effect::new(move || {
        if deleted.get() {
            navigate(links::RECIPES, NavigateOptions::default());
        }
    });

    let rate_api = api.clone();
    let on_rate = move |ev: SubmitEvent| {
        ev.prevent_default();
        let (Some(id), Some(value)) = (current_id(), rating.get_untracked()) else {
            return;
        };
        let api = rate_api.clone();
        spawn_request(async move {
            if recipe_detail::submit_rating(&*api, &id, value, &recipe).await.succeeded() {
                rating.try_set(None);
            }
        });
    };

    let comment_api = api.clone();
    let on_comment = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(id) = current_id() else {
            return;
        };
        let content = comment_text.get_untracked();
        let api = comment_api.clone();
        spawn_request(async move {
            if recipe_detail::submit_comment(&*api, &id, &content, &comments).await.succeeded() {
                comment_text.try_set(String::new());
            }
        });
    };

    let share_api = api.clone();
    let on_share = Callback::new(move |method: &'static str| {
        let Some(id) = current_id() else {
            return;
        };
        let api = share_api.clone();
        spawn_request(async move {
            let Some(message) = recipe_detail::share(&*api, &id, method, &recipe).await else {
                return;
            };
            share_notice.try_set(Some(message.clone()));
            #[cfg(feature = "hydrate")]
            gloo_timers::future::sleep(std::time::Duration::from_secs(SHARE_NOTICE_SECS)).await;
            share_notice.try_update(|notice| {
                if notice.as_deref() == Some(message.as_str()) {
                    *notice = None;
                }
            });
        });
    });

    let on_delete = move |_| {
        let Some(id) = current_id() else {
            return;
        };
        let api = api.clone();
        spawn_request(async move {
            if recipe_detail::delete(&*api, &id, &recipe).await.succeeded() {
                deleted.try_set(true);
            }
        });
    };

    let field = move |read: fn(&Recipe) -> String| recipe.with(|s| s.value().map(read).unwrap_or_default());
    let pending = move |kind: MutationKind| recipe.with(|s| s.is_pending(kind));
    let edit_href = move || current_id().map(|id| links::edit(&id)).unwrap_or_default();

    view! {
        <div class="recipe-detail-page">
            <Show
                when=move || recipe.with(|s| s.value().is_some())
                fallback=|| view! { <p>"Loading..."</p> }
            >
                <h1>{move || field(|r| r.title.clone())}</h1>
                <img
                    class="recipe-detail-page__image"
                    src=move || recipe.with(|s| image_src(s.value().and_then(|r| r.image_url.as_deref())))
                    alt=move || field(|r| r.title.clone())
                />
                <section class="recipe-detail-page__section">
                    <h2>"Ingredients"</h2>
                    <p>{move || field(|r| r.ingredients.clone())}</p>
                    <h2>"Instructions"</h2>
                    <p>{move || field(|r| r.instructions.clone())}</p>
                    <p>
                        <strong>"Cuisine: "</strong>
                        {move || field(|r| r.cuisine.clone())}
                    </p>
                    <p>
                        <strong>"Dietary Preferences: "</strong>
                        {move || field(|r| r.dietary_preferences.clone())}
                    </p>
                    <p>
                        <strong>"Average Rating: "</strong>
                        {move || field(|r| format_rating(r.average_rating))}
                    </p>
                </section>

                <form class="recipe-detail-page__rating" on:submit=on_rate.clone()>
                    <label>
                        "Rate this recipe: "
                        <select
                            prop:value=move || rating.get().map(|r| r.value().to_string()).unwrap_or_default()
                            on:change=move |ev| rating.set(rating_choice(&event_target_value(&ev)))
                        >
                            <option value="">"Select rating"</option>
                            {Rating::all()
                                .map(|r| {
                                    view! {
                                        <option value=r.value().to_string()>{rating_option_label(r.value())}</option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <button
                        class="btn"
                        type="submit"
                        disabled=move || rating.get().is_none() || pending(MutationKind::Rate)
                    >
                        "Submit Rating"
                    </button>
                </form>

                <section class="recipe-detail-page__comments">
                    <h2>"Comments"</h2>
                    <ul>
                        {move || {
                            comments
                                .with(|c| c.value().cloned().unwrap_or_default())
                                .into_iter()
                                .map(|c| {
                                    let time = c.created_at.as_deref().map(comment_time);
                                    view! {
                                        <li class="comment">
                                            <span class="comment__content">{c.content}</span>
                                            {time.map(|t| view! { <span class="comment__time">{t}</span> })}
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                    <form on:submit=on_comment.clone()>
                        <textarea
                            placeholder="Add a comment"
                            prop:value=move || comment_text.get()
                            on:input=move |ev| comment_text.set(event_target_value(&ev))
                        ></textarea>
                        <button
                            class="btn"
                            type="submit"
                            disabled=move || comments.with(|c| c.is_pending(MutationKind::Comment))
                        >
                            "Add Comment"
                        </button>
                    </form>
                </section>

                <section class="recipe-detail-page__share">
                    <h2>"Share"</h2>
                    {SHARE_METHODS
                        .into_iter()
                        .map(|method| {
                            view! {
                                <button
                                    class="btn"
                                    disabled=move || pending(MutationKind::Share)
                                    on:click=move |_| on_share.run(method)
                                >
                                    {format!("Share on {method}")}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <Show when=move || share_notice.get().is_some()>
                        <p class="recipe-detail-page__notice">{move || share_notice.get().unwrap_or_default()}</p>
                    </Show>
                </section>

                <div class="recipe-detail-page__actions">
                    <a class="btn" href=edit_href>
                        "Edit Recipe"
                    </a>
                    <button
                        class="btn btn--danger"
                        disabled=move || pending(MutationKind::Delete)
                        on:click=on_delete.clone()
                    >
                        "Delete Recipe"
                    </button>
                </div>
            </Show>
        </div>
    }
}
