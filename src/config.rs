//! Configuration loading
//!
//! Layered in the usual order: compiled defaults, then an optional
//! `Saral.toml` in the working directory, then `SARAL_`-prefixed
//! environment variables (double underscore separates sections, e.g.
//! `SARAL_IMAGE__API_KEY`).

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub image: ImageConfig,
}

/// Image generation service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// API credential; the client reports itself unconfigured without one
    pub api_key: Option<String>,
    /// Base URL of the OpenAI-compatible API
    pub base_url: String,
    /// Generation model
    pub model: String,
    /// Requested image dimensions (always square)
    pub size: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "dall-e-2".to_string(),
            size: "1024x1024".to_string(),
            timeout_secs: 60,
        }
    }
}

impl Config {
    /// The provider stack used by [`Config::load`]
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("Saral.toml"))
            .merge(Env::prefixed("SARAL_").split("__"))
    }

    /// Load configuration from defaults, `Saral.toml`, and the environment
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}
