//! Fallback values used when an event's homepage is missing or incomplete.

use serde::{Deserialize, Serialize};

pub const DEFAULT_WELCOME_TITLE: &str = "WELCOME TO THE EVENT";
pub const DEFAULT_WELCOME_DESCRIPTION: &str = "THIS IS A DESCRIPTION";
pub const NO_HOMEPAGE_DESCRIPTION: &str = "No homepage has been set for this event.";
pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1506744038136-46273834b3fb?auto=format&fit=crop&w=800&q=80";
pub const EMPTY_NOTICE: &str = "No additional content available.";

/// The literals the resolver substitutes for missing homepage fields, and the
/// renderer uses for the cover placeholder and empty-state notice.
///
/// Read from the `[homepage]` table of the config file; any key left out keeps
/// its built-in value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomepageDefaults {
    pub default_title: String,
    pub default_description: String,
    /// Marks a document built because the event has no homepage at all.
    pub no_homepage_description: String,
    pub placeholder_image: String,
    pub empty_notice: String,
}

impl Default for HomepageDefaults {
    fn default() -> Self {
        HomepageDefaults {
            default_title: DEFAULT_WELCOME_TITLE.to_string(),
            default_description: DEFAULT_WELCOME_DESCRIPTION.to_string(),
            no_homepage_description: NO_HOMEPAGE_DESCRIPTION.to_string(),
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
            empty_notice: EMPTY_NOTICE.to_string(),
        }
    }
}
