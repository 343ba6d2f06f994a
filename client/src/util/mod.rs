//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers for route paths and display formatting, kept out of pages and
//! components so they can be unit tested without a reactive runtime.

pub mod format;
pub mod links;
