//! Load/mutate contract shared by every page.
//!
//! DESIGN
//! ======
//! A page keeps its copy of a resource in a [`Synced<T>`] behind a
//! [`ViewCell`] (a Leptos signal in the app). Each request takes a
//! [`Ticket`] when issued and settles against it when the response arrives:
//!
//! - success replaces the local copy with the server's body, clears it for a
//!   delete, or leaves it alone for bodiless acknowledgments (share);
//! - failure leaves the copy untouched and records a diagnostic;
//! - a second mutation of a kind already in flight is rejected before any
//!   request is sent;
//! - a response older than one already applied is dropped as stale, so the
//!   most recently issued request decides the copy regardless of arrival
//!   order;
//! - a response for a view that no longer exists is dropped.

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::api::ApiError;

/// Write operations a page can issue against its resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
    Comment,
    Rate,
    Share,
}

impl MutationKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Comment => "comment",
            Self::Rate => "rate",
            Self::Share => "share",
        }
    }
}

/// Receipt for one issued request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    seq: u64,
    kind: Option<MutationKind>,
}

/// How a request ended, from the page's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settled {
    /// The response body replaced the local copy.
    Applied,
    /// Succeeded without a body to apply (share), or cleared the copy (delete).
    Acknowledged,
    /// Succeeded, but a later-issued request already updated the copy.
    Stale,
    /// Not sent: the same kind of mutation was already in flight.
    Rejected,
    /// Network, status or decode failure. Nothing changed.
    Failed,
    /// The owning view was gone before the request could start or settle.
    Detached,
}

impl Settled {
    /// Whether the service accepted the request.
    pub fn succeeded(self) -> bool {
        matches!(self, Self::Applied | Self::Acknowledged | Self::Stale)
    }
}

/// A page's local copy of one resource plus request bookkeeping.
#[derive(Clone, Debug, PartialEq)]
pub struct Synced<T> {
    value: Option<T>,
    loads: u32,
    pending: Vec<MutationKind>,
    issued: u64,
    applied: u64,
    diagnostic: Option<String>,
}

impl<T> Default for Synced<T> {
    fn default() -> Self {
        Self {
            value: None,
            loads: 0,
            pending: Vec::new(),
            issued: 0,
            applied: 0,
            diagnostic: None,
        }
    }
}

impl<T> Synced<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last copy the service returned, if any.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// At least one load is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loads > 0
    }

    /// A mutation of `kind` is in flight.
    pub fn is_pending(&self, kind: MutationKind) -> bool {
        self.pending.contains(&kind)
    }

    /// Text of the most recent failure, cleared by the next success.
    pub fn diagnostic(&self) -> Option<&str> {
        self.diagnostic.as_deref()
    }

    pub fn begin_load(&mut self) -> Ticket {
        self.loads += 1;
        self.next_ticket(None)
    }

    /// `None` if a mutation of the same kind has not settled yet.
    pub fn begin_mutation(&mut self, kind: MutationKind) -> Option<Ticket> {
        if self.is_pending(kind) {
            return None;
        }
        self.pending.push(kind);
        Some(self.next_ticket(Some(kind)))
    }

    /// Apply the outcome of the request `ticket` was issued for.
    ///
    /// `Ok(Some(_))` carries a server representation, `Ok(None)` a bodiless
    /// success.
    pub fn settle(&mut self, ticket: Ticket, result: Result<Option<T>, ApiError>) -> Settled {
        match ticket.kind {
            None => self.loads = self.loads.saturating_sub(1),
            Some(kind) => {
                if let Some(pos) = self.pending.iter().position(|k| *k == kind) {
                    self.pending.swap_remove(pos);
                }
            }
        }

        let body = match result {
            Ok(body) => body,
            Err(err) => {
                self.diagnostic = Some(err.to_string());
                return Settled::Failed;
            }
        };
        self.diagnostic = None;

        if ticket.kind == Some(MutationKind::Delete) {
            self.applied = self.applied.max(ticket.seq);
            self.value = None;
            return Settled::Acknowledged;
        }
        let Some(value) = body else {
            return Settled::Acknowledged;
        };
        if ticket.seq < self.applied {
            return Settled::Stale;
        }
        self.applied = ticket.seq;
        self.value = Some(value);
        Settled::Applied
    }

    fn next_ticket(&mut self, kind: Option<MutationKind>) -> Ticket {
        self.issued += 1;
        Ticket { seq: self.issued, kind }
    }
}

/// Storage slot for a page's state.
///
/// Both methods return `None` once the owning view has been torn down, which
/// is how late responses get discarded.
pub trait ViewCell<S> {
    fn with_state<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R>;
    fn update_state<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R>;
}

impl<S: Send + Sync + 'static> ViewCell<S> for RwSignal<S> {
    fn with_state<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        self.try_update(f)
    }
}

#[cfg(test)]
impl<S> ViewCell<S> for std::rc::Rc<std::cell::RefCell<S>> {
    fn with_state<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        Some(f(&*self.borrow()))
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        Some(f(&mut *self.borrow_mut()))
    }
}

/// Read the resource into `cell`, replacing the local copy on success.
pub async fn load<T, C, F, Fut>(cell: &C, what: &str, request: F) -> Settled
where
    C: ViewCell<Synced<T>>,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let Some(ticket) = cell.update_state(Synced::begin_load) else {
        return Settled::Detached;
    };
    let result = request().await;
    if let Err(err) = &result {
        leptos::logging::warn!("{what} failed: {err}");
    }
    cell.update_state(|s| s.settle(ticket, result.map(Some)))
        .unwrap_or(Settled::Detached)
}

/// Issue a write of `kind` unless one is already in flight, then settle its
/// response into `cell`.
pub async fn mutate<T, C, F, Fut>(cell: &C, kind: MutationKind, request: F) -> Settled
where
    C: ViewCell<Synced<T>>,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Option<T>, ApiError>>,
{
    let Some(ticket) = cell.update_state(|s| s.begin_mutation(kind)) else {
        return Settled::Detached;
    };
    let Some(ticket) = ticket else {
        leptos::logging::log!("{} ignored: already in flight", kind.label());
        return Settled::Rejected;
    };
    let result = request().await;
    if let Err(err) = &result {
        leptos::logging::warn!("{} failed: {err}", kind.label());
    }
    cell.update_state(|s| s.settle(ticket, result))
        .unwrap_or(Settled::Detached)
}
