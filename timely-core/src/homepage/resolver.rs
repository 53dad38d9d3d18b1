//! Turns the backend's homepage record into a [`HomepageDocument`].

use std::collections::HashSet;
use std::sync::Arc;

use crate::config::HomepageDefaults;
use crate::event_id::EventId;
use crate::homepage::{ContentModule, HomepageDocument};
use crate::remote::EventBackend;
use crate::remote::protocol::HomepageRow;

/// Read path for event homepages.
///
/// `resolve` never fails: a missing homepage, a failed query and an
/// unreadable response all produce [`HomepageDocument::unconfigured`].
#[derive(Clone)]
pub struct HomepageResolver {
    backend: Arc<dyn EventBackend>,
    defaults: HomepageDefaults,
}

impl HomepageResolver {
    pub fn new(backend: Arc<dyn EventBackend>, defaults: HomepageDefaults) -> Self {
        HomepageResolver { backend, defaults }
    }

    pub fn defaults(&self) -> &HomepageDefaults {
        &self.defaults
    }

    pub async fn resolve(&self, event_id: &EventId) -> HomepageDocument {
        let rows = match self.backend.homepage_rows(event_id).await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!(%event_id, error = %e, "homepage fetch failed, showing default");
                return HomepageDocument::unconfigured(&self.defaults);
            }
        };

        match rows.into_iter().next() {
            Some(row) => self.from_row(row),
            None => {
                tracing::debug!(%event_id, "no homepage configured");
                HomepageDocument::unconfigured(&self.defaults)
            }
        }
    }

    fn from_row(&self, row: HomepageRow) -> HomepageDocument {
        HomepageDocument {
            event_image: non_empty(row.event_image),
            welcome_title: non_empty(row.welcome_title)
                .unwrap_or_else(|| self.defaults.default_title.clone()),
            welcome_description: non_empty(row.welcome_description)
                .unwrap_or_else(|| self.defaults.default_description.clone()),
            modules: assign_render_keys(row.modules.unwrap_or_default()),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Give id-less modules a positional key and drop repeats of an earlier id.
/// Order is otherwise untouched.
fn assign_render_keys(modules: Vec<ContentModule>) -> Vec<ContentModule> {
    let mut seen = HashSet::new();

    modules
        .into_iter()
        .enumerate()
        .filter_map(|(index, mut module)| {
            if module.id.trim().is_empty() {
                module.id = format!("module-{index}");
            }
            if seen.insert(module.id.clone()) {
                Some(module)
            } else {
                tracing::warn!(id = %module.id, index, "dropping module with duplicate id");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_WELCOME_DESCRIPTION, DEFAULT_WELCOME_TITLE, NO_HOMEPAGE_DESCRIPTION};
    use crate::homepage::ModuleContent;
    use crate::remote::memory::MemoryBackend;
    use serde_json::json;

    fn event() -> EventId {
        EventId::parse("evt-1").unwrap()
    }

    fn resolver(backend: MemoryBackend) -> HomepageResolver {
        HomepageResolver::new(Arc::new(backend), HomepageDefaults::default())
    }

    fn row(value: serde_json::Value) -> HomepageRow {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn full_row_is_used_as_is() {
        let backend = MemoryBackend::new().with_homepage(
            "evt-1",
            row(json!({
                "event_image": "https://cdn/cover.jpg",
                "welcome_title": "Lisbon Offsite",
                "welcome_description": "Three days by the sea",
                "modules": [{ "id": "m1", "type": "title", "content": { "text": "Agenda" } }]
            })),
        );

        let doc = resolver(backend).resolve(&event()).await;

        assert_eq!(doc.event_image.as_deref(), Some("https://cdn/cover.jpg"));
        assert_eq!(doc.welcome_title, "Lisbon Offsite");
        assert_eq!(doc.welcome_description, "Three days by the sea");
        assert_eq!(doc.modules, [ContentModule::new("m1", ModuleContent::title("Agenda"))]);
    }

    #[tokio::test]
    async fn missing_fields_take_defaults_and_present_fields_stay() {
        let backend = MemoryBackend::new()
            .with_homepage("evt-1", row(json!({ "welcome_title": "Kept", "event_image": "" })));

        let doc = resolver(backend).resolve(&event()).await;

        assert_eq!(doc.event_image, None);
        assert_eq!(doc.welcome_title, "Kept");
        assert_eq!(doc.welcome_description, DEFAULT_WELCOME_DESCRIPTION);
        assert!(doc.modules.is_empty());
    }

    #[tokio::test]
    async fn empty_strings_count_as_missing() {
        let backend = MemoryBackend::new().with_homepage(
            "evt-1",
            row(json!({ "welcome_title": "", "welcome_description": "", "modules": null })),
        );

        let doc = resolver(backend).resolve(&event()).await;

        assert_eq!(doc.welcome_title, DEFAULT_WELCOME_TITLE);
        assert_eq!(doc.welcome_description, DEFAULT_WELCOME_DESCRIPTION);
    }

    #[tokio::test]
    async fn zero_rows_yield_unconfigured_document() {
        let doc = resolver(MemoryBackend::new()).resolve(&event()).await;

        assert_eq!(doc.welcome_description, NO_HOMEPAGE_DESCRIPTION);
        assert_eq!(doc.welcome_title, DEFAULT_WELCOME_TITLE);
        assert_eq!(doc.event_image, None);
        assert!(doc.modules.is_empty());
    }

    #[tokio::test]
    async fn backend_failure_collapses_to_unconfigured_document() {
        let backend = MemoryBackend::new().with_failure("evt-1", "connection reset");

        let doc = resolver(backend).resolve(&event()).await;

        assert_eq!(doc, HomepageDocument::unconfigured(&HomepageDefaults::default()));
    }

    #[tokio::test]
    async fn injected_defaults_replace_builtin_literals() {
        let defaults = HomepageDefaults {
            default_title: "Hola".into(),
            no_homepage_description: "Nada".into(),
            ..HomepageDefaults::default()
        };
        let resolver = HomepageResolver::new(Arc::new(MemoryBackend::new()), defaults);

        let doc = resolver.resolve(&event()).await;

        assert_eq!(doc.welcome_title, "Hola");
        assert_eq!(doc.welcome_description, "Nada");
    }

    #[tokio::test]
    async fn module_order_follows_sequence_not_position() {
        let backend = MemoryBackend::new().with_homepage(
            "evt-1",
            row(json!({ "modules": [
                { "id": "a", "type": "list", "content": { "items": ["x"] }, "position": 3 },
                { "id": "b", "type": "title", "content": { "text": "t" }, "position": 1 },
                { "id": "c", "type": "image", "content": { "url": "u" }, "position": 2 }
            ]})),
        );

        let doc = resolver(backend).resolve(&event()).await;

        let ids: Vec<&str> = doc.modules.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn one_bad_module_does_not_cost_the_homepage() {
        let backend = MemoryBackend::new().with_homepage(
            "evt-1",
            row(json!({
                "welcome_title": "Lisbon Offsite",
                "modules": [
                    { "id": "m1", "type": "title", "content": { "text": "Agenda" } },
                    null,
                    { "id": null, "type": "description", "content": { "text": "Arrive early" } },
                    { "id": 7, "type": null },
                    { "id": "m4", "type": "list", "content": { "items": ["Tea"] } }
                ]
            })),
        );

        let doc = resolver(backend).resolve(&event()).await;

        assert_eq!(doc.welcome_title, "Lisbon Offsite");
        let ids: Vec<&str> = doc.modules.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["m1", "module-1", "7", "m4"]);
        assert_eq!(doc.modules[1].content, ModuleContent::description("Arrive early"));
    }

    #[test]
    fn render_keys_are_filled_in_and_deduplicated() {
        let modules = assign_render_keys(vec![
            ContentModule::new("", ModuleContent::title("first")),
            ContentModule::new("dup", ModuleContent::title("second")),
            ContentModule::new("dup", ModuleContent::title("third")),
            ContentModule::new("  ", ModuleContent::title("fourth")),
        ]);

        let ids: Vec<&str> = modules.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["module-0", "dup", "module-3"]);
    }
}
