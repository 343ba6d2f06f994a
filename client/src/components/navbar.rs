//! Top navigation bar rendered on every route.

use leptos::prelude::*;

use crate::util::links;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <a class="navbar__brand" href=links::HOME>
                "Recipe Organizer"
            </a>
            <ul class="navbar__links">
                <li>
                    <a href=links::HOME>"Home"</a>
                </li>
                <li>
                    <a href=links::RECIPES>"Recipes"</a>
                </li>
                <li>
                    <a href=links::NEW_RECIPE>"Add New Recipe"</a>
                </li>
            </ul>
        </nav>
    }
}
