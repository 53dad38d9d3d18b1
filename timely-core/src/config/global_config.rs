//! Global Timely configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_WELCOME_DESCRIPTION, DEFAULT_WELCOME_TITLE, EMPTY_NOTICE, HomepageDefaults,
    NO_HOMEPAGE_DESCRIPTION, PLACEHOLDER_IMAGE,
};
use crate::error::{TimelyError, TimelyResult};

static DEFAULT_TIMEOUT: &str = "10s";
const DEFAULT_SERVER_PORT: u16 = 4097;

fn default_timeout() -> String {
    DEFAULT_TIMEOUT.to_string()
}

fn default_server_port() -> u16 {
    DEFAULT_SERVER_PORT
}

/// Global configuration at ~/.config/timely/config.toml
///
/// Every key can also be set from the environment with a `TIMELY_` prefix and
/// `__` between table and key, e.g. `TIMELY_BACKEND__URL`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimelyConfig {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub homepage: HomepageDefaults,

    #[serde(default)]
    pub server: ServerConfig,
}

/// Connection settings for the hosted backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub anon_key: Option<String>,

    /// Signed-in user's token; sent instead of the anon key as bearer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// Request timeout as a humantime string ("10s", "1m 30s").
    #[serde(default = "default_timeout")]
    pub timeout: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        BackendConfig {
            url: None,
            anon_key: None,
            access_token: None,
            timeout: default_timeout(),
        }
    }
}

impl BackendConfig {
    pub fn base_url(&self) -> TimelyResult<url::Url> {
        let raw = self.url.as_deref().ok_or_else(|| {
            TimelyError::Config(
                "backend.url is not set (config file or TIMELY_BACKEND__URL)".into(),
            )
        })?;

        url::Url::parse(raw)
            .map_err(|e| TimelyError::Config(format!("backend.url {raw:?} is invalid: {e}")))
    }

    pub fn timeout(&self) -> TimelyResult<Duration> {
        humantime::parse_duration(&self.timeout).map_err(|e| {
            TimelyError::Config(format!("backend.timeout {:?} is invalid: {e}", self.timeout))
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: default_server_port(),
        }
    }
}

impl TimelyConfig {
    pub fn config_path() -> TimelyResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| TimelyError::Config("Could not determine config directory".into()))?
            .join("timely");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented-out template on first run.
    pub fn load() -> TimelyResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from an explicit file, layered under `TIMELY_*` environment variables.
    pub fn load_from(path: &Path) -> TimelyResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(
                Environment::with_prefix("TIMELY")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(|e| TimelyError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| TimelyError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> TimelyResult<()> {
        let contents = format!(
            "\
# timely configuration

[backend]
# url = \"https://your-project.supabase.co\"
# anon_key = \"...\"
# access_token = \"...\"
# timeout = \"{DEFAULT_TIMEOUT}\"

[homepage]
# default_title = \"{DEFAULT_WELCOME_TITLE}\"
# default_description = \"{DEFAULT_WELCOME_DESCRIPTION}\"
# no_homepage_description = \"{NO_HOMEPAGE_DESCRIPTION}\"
# placeholder_image = \"{PLACEHOLDER_IMAGE}\"
# empty_notice = \"{EMPTY_NOTICE}\"

[server]
# port = {DEFAULT_SERVER_PORT}
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TimelyError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| TimelyError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
