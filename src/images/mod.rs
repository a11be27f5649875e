//! Image generation via an OpenAI-compatible images API
//!
//! Provides:
//! - A thin client for the `/images/generations` endpoint
//! - A tagged outcome API plus the legacy URL-or-nothing adapter

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::ImageConfig;

/// Image generation errors
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("image API key not configured")]
    NotConfigured,

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error: {status}")]
    Api { status: StatusCode, body: String },
}

/// Image generation request
#[derive(Debug, Serialize)]
struct ImageRequest {
    model: String,
    prompt: String,
    n: u32,
    size: String,
}

/// Image generation response
#[derive(Debug, Deserialize)]
struct ImageResponse {
    data: Vec<ImageResult>,
}

#[derive(Debug, Deserialize)]
struct ImageResult {
    url: Option<String>,
}

/// Client for the external image generation service.
///
/// Each call is independent; the client holds no mutable state and can be
/// shared freely across tasks.
#[derive(Debug, Clone)]
pub struct ImageClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
    size: String,
}

impl ImageClient {
    /// Create a client from the image section of the configuration
    pub fn new(config: &ImageConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .unwrap(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            size: config.size.clone(),
        }
    }

    /// Check if an API key is configured
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Request one square image for the prompt.
    ///
    /// Returns `Ok(Some(url))` for the first result carrying a URL,
    /// `Ok(None)` when the service produced no result, and `Err` for
    /// transport, auth, and service failures.
    pub async fn generate(&self, prompt: &str) -> Result<Option<String>, ImageError> {
        let api_key = self.api_key.as_ref().ok_or(ImageError::NotConfigured)?;

        let request = ImageRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            n: 1,
            size: self.size.clone(),
        };

        debug!("requesting one {} image from {}", self.size, self.base_url);

        let response = self
            .client
            .post(format!("{}/images/generations", self.base_url))
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("image API error: {} - {}", status, body);
            return Err(ImageError::Api { status, body });
        }

        let image_response: ImageResponse = response.json().await?;

        Ok(image_response.data.first().and_then(|d| d.url.clone()))
    }

    /// Legacy adapter: the URL on success, `None` for both "no result"
    /// and any failure. Failures are logged before being collapsed.
    pub async fn generate_image(&self, prompt: &str) -> Option<String> {
        match self.generate(prompt).await {
            Ok(Some(url)) => Some(url),
            Ok(None) => {
                debug!("image API returned no result");
                None
            }
            Err(e) => {
                warn!("image generation failed: {}", e);
                None
            }
        }
    }
}
