//! Caller-side homepage state: the current document, a loading flag, and
//! protection against out-of-order responses.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::event_id::EventId;
use crate::homepage::{HomepageDocument, HomepageResolver};

/// Holds the homepage a guest is looking at.
///
/// Each resolution takes a ticket from a monotonically increasing counter. A
/// finished resolution is applied only if its ticket is still the newest, so
/// a slow response for an event the guest has already left never overwrites
/// the document for the event they moved to.
pub struct HomepageView {
    resolver: HomepageResolver,
    latest_ticket: AtomicU64,
    state: Mutex<ViewState>,
}

struct ViewState {
    document: HomepageDocument,
    loading: bool,
    observed: Option<EventId>,
}

impl HomepageView {
    /// Starts from the resolver's placeholder document.
    pub fn new(resolver: HomepageResolver) -> Self {
        let initial = HomepageDocument::placeholder(resolver.defaults());
        Self::with_document(resolver, initial)
    }

    pub fn with_document(resolver: HomepageResolver, initial: HomepageDocument) -> Self {
        HomepageView {
            resolver,
            latest_ticket: AtomicU64::new(0),
            state: Mutex::new(ViewState {
                document: initial,
                loading: false,
                observed: None,
            }),
        }
    }

    pub fn document(&self) -> HomepageDocument {
        self.lock().document.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    pub fn resolver(&self) -> &HomepageResolver {
        &self.resolver
    }

    /// React to the caller's current event id.
    ///
    /// Without an id nothing is fetched and the current document stays. An id
    /// equal to the last one observed is not fetched again. Returns whether a
    /// new document was applied.
    pub async fn observe(&self, event_id: Option<&EventId>) -> bool {
        let Some(event_id) = event_id else {
            tracing::debug!("no event id yet, keeping current homepage");
            return false;
        };

        {
            let mut state = self.lock();
            if state.observed.as_ref() == Some(event_id) {
                return false;
            }
            state.observed = Some(event_id.clone());
        }

        self.refresh(event_id).await
    }

    /// Resolve `event_id` unconditionally. Returns whether the result was
    /// applied (false when a newer refresh started in the meantime).
    pub async fn refresh(&self, event_id: &EventId) -> bool {
        let ticket = self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1;
        self.lock().loading = true;

        let document = self.resolver.resolve(event_id).await;

        let mut state = self.lock();
        if self.latest_ticket.load(Ordering::SeqCst) != ticket {
            tracing::debug!(%event_id, ticket, "discarding superseded homepage response");
            return false;
        }
        state.document = document;
        state.loading = false;
        true
    }

    fn lock(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
