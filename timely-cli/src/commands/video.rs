use anyhow::Result;
use timely_core::render::VideoSource;

use crate::render::Render;

pub fn run(url: &str) -> Result<()> {
    println!("{}", VideoSource::classify(url).render());
    Ok(())
}
