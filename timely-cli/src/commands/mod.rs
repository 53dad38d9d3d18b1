pub mod config;
pub mod homepage;
pub mod module;
pub mod video;

use std::sync::Arc;

use anyhow::Result;
use timely_core::config::TimelyConfig;
use timely_core::remote::backend::Backend;

fn connect(config: &TimelyConfig) -> Result<Arc<Backend>> {
    let backend = Backend::from_config(&config.backend)?;
    Ok(Arc::new(backend))
}
