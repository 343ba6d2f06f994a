//! Networking modules for the recipe service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the service client trait and its HTTP implementation,
//! `transport` carries the raw requests behind a trait, and `types` defines the
//! wire schema.

pub mod api;
#[cfg(test)]
pub(crate) mod fake;
pub(crate) mod transport;
pub mod types;
