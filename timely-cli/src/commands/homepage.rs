use anyhow::{Context, Result};
use timely_core::EventId;
use timely_core::config::TimelyConfig;
use timely_core::homepage::{HomepageResolver, HomepageView};
use timely_core::render::render;

use super::connect;
use crate::render::Render;
use crate::utils::tui::with_spinner;

pub async fn run(config: &TimelyConfig, event_id: &str, json: bool) -> Result<()> {
    let event_id = EventId::parse(event_id)?;
    let backend = connect(config)?;

    let resolver = HomepageResolver::new(backend, config.homepage.clone());
    let view = HomepageView::new(resolver);

    with_spinner(
        format!("Loading homepage for {event_id}"),
        view.observe(Some(&event_id)),
    )
    .await;

    let document = view.document();

    if json {
        let out = serde_json::to_string_pretty(&document)
            .context("Failed to serialize homepage")?;
        println!("{out}");
        return Ok(());
    }

    for node in render(&document, &config.homepage) {
        println!("{}", node.render());
    }

    Ok(())
}
