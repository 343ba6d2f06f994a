//! Landing page.

use leptos::prelude::*;

use crate::util::links;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Welcome to Recipe Organizer"</h1>
                <p>"Collect your favourite recipes, rate them, and share them with friends."</p>
                <a class="btn btn--primary" href=links::RECIPES>
                    "View Recipes"
                </a>
            </section>
        </div>
    }
}
