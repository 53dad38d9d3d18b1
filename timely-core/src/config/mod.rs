//! Configuration types for Timely.

mod global_config;
mod homepage_defaults;

pub use global_config::{BackendConfig, ServerConfig, TimelyConfig};
pub use homepage_defaults::{
    DEFAULT_WELCOME_DESCRIPTION, DEFAULT_WELCOME_TITLE, EMPTY_NOTICE, HomepageDefaults,
    NO_HOMEPAGE_DESCRIPTION, PLACEHOLDER_IMAGE,
};
