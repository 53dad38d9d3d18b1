//! The guest-facing homepage of an event.

mod module;
mod resolver;
mod view;

pub use module::{
    CollageContent, ContentModule, ImageContent, ListContent, ModuleContent, TextContent,
    VideoContent,
};
pub(crate) use module::deserialize_modules;
pub use resolver::HomepageResolver;
pub use view::HomepageView;

use serde::{Deserialize, Serialize};

use crate::config::HomepageDefaults;

/// An assembled, defaulted homepage.
///
/// Built fresh on every fetch and never mutated afterwards. `modules` is in
/// render order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomepageDocument {
    pub event_image: Option<String>,
    pub welcome_title: String,
    pub welcome_description: String,
    pub modules: Vec<ContentModule>,
}

impl HomepageDocument {
    /// What a caller shows before anything has been fetched.
    pub fn placeholder(defaults: &HomepageDefaults) -> Self {
        HomepageDocument {
            event_image: None,
            welcome_title: defaults.default_title.clone(),
            welcome_description: defaults.default_description.clone(),
            modules: Vec::new(),
        }
    }

    /// The document for an event without a configured homepage, or whose
    /// homepage could not be loaded.
    pub fn unconfigured(defaults: &HomepageDefaults) -> Self {
        HomepageDocument {
            event_image: None,
            welcome_title: defaults.default_title.clone(),
            welcome_description: defaults.no_homepage_description.clone(),
            modules: Vec::new(),
        }
    }

    pub fn is_unconfigured(&self, defaults: &HomepageDefaults) -> bool {
        self.welcome_description == defaults.no_homepage_description
    }

    pub fn cover_image<'a>(&'a self, defaults: &'a HomepageDefaults) -> &'a str {
        self.event_image
            .as_deref()
            .unwrap_or(&defaults.placeholder_image)
    }
}
