//! # Client configuration — `portal.toml`
//!
//! The web package embeds a `portal.toml` at build time and parses it into a
//! [`PortalConfig`]. Every field has a default, so an empty or partial file is
//! valid.
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000"   # remote REST API, no trailing slash needed
//! ```

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `portal.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Remote API settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin (and optional prefix) that `/auth/...` and `/api/...` paths are joined to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl PortalConfig {
    /// Builder method to point at a different API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Apply a build-time override such as `option_env!("PORTAL_API_BASE_URL")`.
    /// Empty values are ignored.
    pub fn with_base_url_override(self, base_url: Option<&str>) -> Self {
        match base_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => self.with_base_url(url),
            None => self,
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "portal.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
