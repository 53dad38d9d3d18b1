//! Turns a [`HomepageDocument`] into the sequence of nodes a client draws.
//!
//! Rendering is a pure function of the document and the configured defaults.
//! Image urls are passed through as opaque references; loading them and
//! handling broken images belongs to the presentation layer.

mod video;

pub use video::{EmbeddedPlayer, VideoSource};

use serde::Serialize;

use crate::config::HomepageDefaults;
use crate::homepage::{ContentModule, HomepageDocument, ModuleContent};

/// Collage grid width.
pub const COLLAGE_COLUMNS: usize = 3;
/// Cells beyond this are not shown.
pub const COLLAGE_MAX_IMAGES: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AspectRatio {
    pub width: u32,
    pub height: u32,
}

impl AspectRatio {
    pub const WIDESCREEN: AspectRatio = AspectRatio {
        width: 16,
        height: 9,
    };
    pub const SQUARE: AspectRatio = AspectRatio {
        width: 1,
        height: 1,
    };
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum RenderNode {
    CoverImage {
        url: String,
        aspect_ratio: AspectRatio,
    },
    WelcomeTitle {
        text: String,
    },
    WelcomeDescription {
        text: String,
    },
    /// Large centered heading.
    Heading {
        key: String,
        text: String,
    },
    /// Body paragraph.
    Paragraph {
        key: String,
        text: String,
    },
    Image {
        key: String,
        url: String,
        aspect_ratio: AspectRatio,
    },
    Collage {
        key: String,
        columns: usize,
        cell_aspect_ratio: AspectRatio,
        images: Vec<String>,
    },
    Video {
        key: String,
        source: VideoSource,
    },
    /// One row per item.
    List {
        key: String,
        items: Vec<String>,
    },
    /// Shown under the welcome text when the event has no homepage at all.
    EmptyNotice {
        text: String,
    },
}

impl RenderNode {
    /// Render key of a module node; `None` for the document-level nodes.
    pub fn key(&self) -> Option<&str> {
        match self {
            RenderNode::Heading { key, .. }
            | RenderNode::Paragraph { key, .. }
            | RenderNode::Image { key, .. }
            | RenderNode::Collage { key, .. }
            | RenderNode::Video { key, .. }
            | RenderNode::List { key, .. } => Some(key),
            _ => None,
        }
    }
}

pub fn render(document: &HomepageDocument, defaults: &HomepageDefaults) -> Vec<RenderNode> {
    let mut nodes = vec![
        RenderNode::CoverImage {
            url: document.cover_image(defaults).to_string(),
            aspect_ratio: AspectRatio::WIDESCREEN,
        },
        RenderNode::WelcomeTitle {
            text: document.welcome_title.clone(),
        },
        RenderNode::WelcomeDescription {
            text: document.welcome_description.clone(),
        },
    ];

    if document.modules.is_empty() {
        if document.is_unconfigured(defaults) {
            nodes.push(RenderNode::EmptyNotice {
                text: defaults.empty_notice.clone(),
            });
        }
        return nodes;
    }

    nodes.extend(document.modules.iter().filter_map(render_module));
    nodes
}

/// The node for one module, or `None` when the module has nothing to show.
pub fn render_module(module: &ContentModule) -> Option<RenderNode> {
    let key = module.id.clone();

    let node = match &module.content {
        ModuleContent::Title(c) => RenderNode::Heading {
            key,
            text: c.text.clone(),
        },
        ModuleContent::Description(c) => RenderNode::Paragraph {
            key,
            text: c.text.clone(),
        },
        ModuleContent::Image(c) => RenderNode::Image {
            key,
            url: c.url.clone(),
            aspect_ratio: AspectRatio::WIDESCREEN,
        },
        ModuleContent::Collage(c) => {
            if c.images.is_empty() {
                return None;
            }
            RenderNode::Collage {
                key,
                columns: COLLAGE_COLUMNS,
                cell_aspect_ratio: AspectRatio::SQUARE,
                images: c.images.iter().take(COLLAGE_MAX_IMAGES).cloned().collect(),
            }
        }
        ModuleContent::Video(c) => RenderNode::Video {
            key,
            source: VideoSource::classify(&c.url),
        },
        ModuleContent::List(c) => RenderNode::List {
            key,
            items: c.items.clone(),
        },
        ModuleContent::Unknown { kind, .. } => {
            tracing::debug!(id = %module.id, kind = %kind, "skipping module of unknown type");
            return None;
        }
    };

    Some(node)
}
