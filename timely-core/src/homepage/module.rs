//! Typed homepage content blocks.
//!
//! On the wire a module is `{ id, type, content, position? }` where the shape
//! of `content` is implied by `type`. Decoding never fails on payload drift:
//! fields a variant does not define are ignored, a malformed `content` becomes
//! that variant's empty content, and an unrecognized `type` is kept as
//! [`ModuleContent::Unknown`] so the renderer can skip it.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One block of an event homepage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireModule", into = "WireModule")]
pub struct ContentModule {
    /// Stable render key. Unique within a resolved document.
    pub id: String,
    pub content: ModuleContent,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModuleContent {
    Title(TextContent),
    Description(TextContent),
    Image(ImageContent),
    Collage(CollageContent),
    Video(VideoContent),
    List(ListContent),
    /// A `type` this build does not know. Rendered as nothing.
    Unknown { kind: String, content: Value },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextContent {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageContent {
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollageContent {
    pub images: Vec<String>,
    /// Layout hint from the editor. Passed through untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoContent {
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListContent {
    pub items: Vec<String>,
}

impl ContentModule {
    pub fn new(id: impl Into<String>, content: ModuleContent) -> Self {
        ContentModule {
            id: id.into(),
            content,
        }
    }

    pub fn kind(&self) -> &str {
        self.content.kind()
    }
}

impl ModuleContent {
    pub fn title(text: impl Into<String>) -> Self {
        ModuleContent::Title(TextContent { text: text.into() })
    }

    pub fn description(text: impl Into<String>) -> Self {
        ModuleContent::Description(TextContent { text: text.into() })
    }

    pub fn image(url: impl Into<String>) -> Self {
        ModuleContent::Image(ImageContent { url: url.into() })
    }

    pub fn collage<I, S>(images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ModuleContent::Collage(CollageContent {
            images: images.into_iter().map(Into::into).collect(),
            layout: None,
        })
    }

    pub fn video(url: impl Into<String>) -> Self {
        ModuleContent::Video(VideoContent { url: url.into() })
    }

    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ModuleContent::List(ListContent {
            items: items.into_iter().map(Into::into).collect(),
        })
    }

    /// The wire discriminant.
    pub fn kind(&self) -> &str {
        match self {
            ModuleContent::Title(_) => "title",
            ModuleContent::Description(_) => "description",
            ModuleContent::Image(_) => "image",
            ModuleContent::Collage(_) => "collage",
            ModuleContent::Video(_) => "video",
            ModuleContent::List(_) => "list",
            ModuleContent::Unknown { kind, .. } => kind,
        }
    }

    fn from_wire(kind: String, content: Value) -> Self {
        match kind.as_str() {
            "title" => ModuleContent::Title(decode_lenient(&kind, content)),
            "description" => ModuleContent::Description(decode_lenient(&kind, content)),
            "image" => ModuleContent::Image(decode_lenient(&kind, content)),
            "collage" => ModuleContent::Collage(decode_lenient(&kind, content)),
            "video" => ModuleContent::Video(decode_lenient(&kind, content)),
            "list" => ModuleContent::List(decode_lenient(&kind, content)),
            _ => ModuleContent::Unknown { kind, content },
        }
    }

    fn to_wire(&self) -> Value {
        let encoded = match self {
            ModuleContent::Title(c) | ModuleContent::Description(c) => serde_json::to_value(c),
            ModuleContent::Image(c) => serde_json::to_value(c),
            ModuleContent::Collage(c) => serde_json::to_value(c),
            ModuleContent::Video(c) => serde_json::to_value(c),
            ModuleContent::List(c) => serde_json::to_value(c),
            ModuleContent::Unknown { content, .. } => return content.clone(),
        };
        encoded.unwrap_or(Value::Null)
    }
}

fn decode_lenient<T: DeserializeOwned + Default>(kind: &str, content: Value) -> T {
    if content.is_null() {
        return T::default();
    }
    serde_json::from_value(content).unwrap_or_else(|e| {
        tracing::warn!(kind, error = %e, "malformed module content, rendering it empty");
        T::default()
    })
}

/// Decode a stored `modules` array one entry at a time. Entries that are not
/// objects are skipped, so one bad entry never costs the rest of the page.
/// Anything other than an array counts as no modules.
pub(crate) fn deserialize_modules<'de, D>(
    deserializer: D,
) -> Result<Option<Vec<ContentModule>>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            tracing::warn!(found = %other, "modules is not an array, ignoring it");
            return Ok(None);
        }
    };

    let modules = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(module) => Some(module),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping undecodable module");
                None
            }
        })
        .collect();

    Ok(Some(modules))
}

/// Strings pass through, numbers are printed, anything else is empty.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Serialized form of a module. `position` is accepted from older payloads
/// and dropped: sequence order is the render order.
#[derive(Serialize, Deserialize)]
struct WireModule {
    #[serde(default, deserialize_with = "lenient_string")]
    id: String,
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    kind: String,
    #[serde(default)]
    content: Value,
}

impl From<WireModule> for ContentModule {
    fn from(wire: WireModule) -> Self {
        ContentModule {
            id: wire.id,
            content: ModuleContent::from_wire(wire.kind, wire.content),
        }
    }
}

impl From<ContentModule> for WireModule {
    fn from(module: ContentModule) -> Self {
        WireModule {
            kind: module.kind().to_string(),
            content: module.content.to_wire(),
            id: module.id,
        }
    }
}
