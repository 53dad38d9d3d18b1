use std::sync::Arc;

use anyhow::Result;
use timely_core::config::{HomepageDefaults, TimelyConfig};
use timely_core::homepage::HomepageResolver;
use timely_core::remote::EventBackend;
use timely_core::remote::backend::Backend;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    resolver: HomepageResolver,
    backend: Arc<dyn EventBackend>,
}

impl AppState {
    pub fn new(config: &TimelyConfig) -> Result<Self> {
        let backend = Backend::from_config(&config.backend)?;
        Ok(Self::with_backend(Arc::new(backend), config.homepage.clone()))
    }

    pub fn with_backend(backend: Arc<dyn EventBackend>, defaults: HomepageDefaults) -> Self {
        AppState {
            resolver: HomepageResolver::new(backend.clone(), defaults),
            backend,
        }
    }

    pub fn resolver(&self) -> &HomepageResolver {
        &self.resolver
    }

    pub fn backend(&self) -> &dyn EventBackend {
        self.backend.as_ref()
    }
}
