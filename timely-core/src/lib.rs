//! Core library for Timely event homepages.
//!
//! - [`homepage`]: the content module schema, the resolver that assembles a
//!   [`homepage::HomepageDocument`] from the backend, and the caller-side view state
//! - [`render`]: document to render nodes, including video link classification
//! - [`authoring`]: the multiple choice module wizard
//! - [`remote`]: the backend seam and its HTTP client
//! - [`config`]: global configuration and the homepage fallback literals

pub mod authoring;
pub mod config;
pub mod error;
pub mod event_id;
pub mod guest;
pub mod homepage;
pub mod remote;
pub mod render;

pub use error::{TimelyError, TimelyResult};
pub use event_id::EventId;
pub use guest::Guest;
