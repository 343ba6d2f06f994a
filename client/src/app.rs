//! Root application component with routing and the service client context.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::net::api::{HttpRecipeApi, SharedApi};
use crate::pages::{
    home::HomePage, recipe_detail::RecipeDetailPage, recipe_form::RecipeFormPage, recipe_list::RecipeListPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared service client and sets up client-side routing. Page
/// state is never shared; each page creates its own signals on mount.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api: SharedApi = Arc::new(HttpRecipeApi::default());
    provide_context(api);

    view! {
        <Stylesheet id="leptos" href="/pkg/recipe-organizer.css"/>
        <Title text="Recipe Organizer"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("recipes") view=RecipeListPage/>
                    <Route path=(StaticSegment("recipes"), StaticSegment("new")) view=RecipeFormPage/>
                    <Route path=(StaticSegment("recipes"), ParamSegment("id")) view=RecipeDetailPage/>
                    <Route
                        path=(StaticSegment("recipes"), ParamSegment("id"), StaticSegment("edit"))
                        view=RecipeFormPage
                    />
                </Routes>
            </main>
        </Router>
    }
}
