//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the navigation chrome, recipe cards and the search form.
//! They receive data through props and report user intent through callbacks;
//! none of them talk to the service directly.

pub mod navbar;
pub mod recipe_card;
pub mod search_bar;
