//! Access to the hosted backend.
//!
//! The backend owns storage, auth and realtime delivery; Timely only calls a
//! handful of remote functions on it. [`EventBackend`] is the seam the
//! resolver, the CLI and the server depend on. [`backend::Backend`] is the
//! HTTP implementation and [`memory::MemoryBackend`] an in-process one.

pub mod backend;
pub mod memory;
pub mod protocol;

use async_trait::async_trait;

use crate::authoring::ModuleSubmission;
use crate::error::TimelyResult;
use crate::event_id::EventId;
use crate::guest::Guest;
use crate::remote::protocol::HomepageRow;

#[async_trait]
pub trait EventBackend: Send + Sync {
    /// Homepage records for an event. Zero rows means no homepage is configured.
    async fn homepage_rows(&self, event_id: &EventId) -> TimelyResult<Vec<HomepageRow>>;

    /// Guests that can be targeted by a new module.
    async fn event_guests(&self, event_id: &EventId) -> TimelyResult<Vec<Guest>>;

    /// Persist an authored module. Returns the id the backend assigned.
    async fn create_module(
        &self,
        event_id: &EventId,
        submission: &ModuleSubmission,
    ) -> TimelyResult<String>;
}
