//! In-process backend, for tests and offline previews.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

use crate::authoring::ModuleSubmission;
use crate::error::{TimelyError, TimelyResult};
use crate::event_id::EventId;
use crate::guest::Guest;
use crate::remote::EventBackend;
use crate::remote::protocol::HomepageRow;

#[derive(Default)]
pub struct MemoryBackend {
    homepages: HashMap<String, HomepageReply>,
    guests: HashMap<String, Vec<Guest>>,
    created: Mutex<Vec<(EventId, ModuleSubmission)>>,
}

#[derive(Clone, Default)]
struct HomepageReply {
    rows: Vec<HomepageRow>,
    failure: Option<String>,
    delay: Duration,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_homepage(mut self, event_id: &str, row: HomepageRow) -> Self {
        self.homepages.entry(event_id.to_string()).or_default().rows = vec![row];
        self
    }

    /// Make homepage queries for `event_id` fail with `message`.
    pub fn with_failure(mut self, event_id: &str, message: &str) -> Self {
        self.homepages.entry(event_id.to_string()).or_default().failure =
            Some(message.to_string());
        self
    }

    /// Hold homepage responses for `event_id` back by `delay`.
    pub fn with_delay(mut self, event_id: &str, delay: Duration) -> Self {
        self.homepages.entry(event_id.to_string()).or_default().delay = delay;
        self
    }

    pub fn with_guests(mut self, event_id: &str, guests: Vec<Guest>) -> Self {
        self.guests.insert(event_id.to_string(), guests);
        self
    }

    /// Modules stored through [`EventBackend::create_module`], oldest first.
    pub fn created_modules(&self) -> Vec<(EventId, ModuleSubmission)> {
        self.lock_created().clone()
    }

    fn lock_created(&self) -> MutexGuard<'_, Vec<(EventId, ModuleSubmission)>> {
        self.created.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl EventBackend for MemoryBackend {
    async fn homepage_rows(&self, event_id: &EventId) -> TimelyResult<Vec<HomepageRow>> {
        let reply = self
            .homepages
            .get(event_id.as_str())
            .cloned()
            .unwrap_or_default();

        if !reply.delay.is_zero() {
            tokio::time::sleep(reply.delay).await;
        }

        match reply.failure {
            Some(message) => Err(TimelyError::Backend(message)),
            None => Ok(reply.rows),
        }
    }

    async fn event_guests(&self, event_id: &EventId) -> TimelyResult<Vec<Guest>> {
        Ok(self
            .guests
            .get(event_id.as_str())
            .cloned()
            .unwrap_or_default())
    }

    async fn create_module(
        &self,
        event_id: &EventId,
        submission: &ModuleSubmission,
    ) -> TimelyResult<String> {
        let mut created = self.lock_created();
        created.push((event_id.clone(), submission.clone()));
        Ok(format!("module-{}", created.len()))
    }
}
