//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page creates its own signals on mount, reads the shared service
//! client from context, and drives the flows in `state`. Rendering details
//! live in `components`.

pub mod home;
pub mod recipe_detail;
pub mod recipe_form;
pub mod recipe_list;

use std::future::Future;

/// Run a request flow on the browser task queue.
///
/// Requests only run in the hydrated client; during server rendering the
/// future is dropped and the page renders its loading state.
pub(crate) fn spawn_request(task: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(task);
    #[cfg(not(feature = "hydrate"))]
    drop(task);
}
