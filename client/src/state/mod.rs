//! Page state and the request flows that update it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page owns its state in `RwSignal`s created on mount. The modules here
//! hold the pure state types and the async flows that issue service requests
//! and settle their responses, so they can be tested without a browser.

pub mod recipe_detail;
pub mod recipe_form;
pub mod recipe_list;
pub mod sync;
