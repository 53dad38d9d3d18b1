//! Terminal rendering for homepage nodes.
//!
//! Extension traits that turn timely-core render nodes into colored
//! terminal text using owo_colors.

use owo_colors::OwoColorize;
use timely_core::render::{COLLAGE_COLUMNS, RenderNode, VideoSource};

pub trait Render {
    fn render(&self) -> String;
}

impl Render for VideoSource {
    fn render(&self) -> String {
        match self {
            VideoSource::Missing => "No video URL provided.".dimmed().to_string(),
            VideoSource::Embed {
                video_id,
                embed_url,
            } => format!(
                "▶ {} {}",
                embed_url.cyan(),
                format!("({video_id})").dimmed()
            ),
            VideoSource::Link { url } => format!("Video URL:\n   {}", url.underline()),
        }
    }
}

impl Render for RenderNode {
    fn render(&self) -> String {
        match self {
            RenderNode::CoverImage { url, .. } => format!("🖼  {}\n", url.dimmed()),
            RenderNode::WelcomeTitle { text } => text.bold().to_string(),
            RenderNode::WelcomeDescription { text } => format!("{text}\n"),
            RenderNode::Heading { text, .. } => format!("\n{}", text.bold().underline()),
            RenderNode::Paragraph { text, .. } => text.clone(),
            RenderNode::Image { url, .. } => format!("🖼  {url}"),
            RenderNode::Collage { images, .. } => render_collage(images),
            RenderNode::Video { source, .. } => source.render(),
            RenderNode::List { items, .. } => items
                .iter()
                .map(|item| format!("  • {item}"))
                .collect::<Vec<_>>()
                .join("\n"),
            RenderNode::EmptyNotice { text } => text.dimmed().italic().to_string(),
        }
    }
}

/// One line per grid row.
fn render_collage(images: &[String]) -> String {
    images
        .chunks(COLLAGE_COLUMNS)
        .map(|row| format!("  {}", row.join("  ").dimmed()))
        .collect::<Vec<_>>()
        .join("\n")
}
