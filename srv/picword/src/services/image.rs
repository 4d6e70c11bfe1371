use log::warn;

use crate::utils::encode_uri_component;

pub const PLACEHOLDER_BASE: &str = "https://via.placeholder.com/512x512.png?text=";

/// Value shipped in the sample `.env`; treated the same as a missing key
pub const SAMPLE_API_KEY: &str = "your_api_key_here";

#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("image generation API key is not configured")]
    NotConfigured,
    #[error("image generation failed: {0}")]
    Failed(String),
}

/// Something that can turn a prompt into an image URL
pub trait ImageProvider: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String, ImageError>;
}

pub fn placeholder_image_url(prompt: &str) -> String {
    format!("{}{}", PLACEHOLDER_BASE, encode_uri_component(prompt))
}

/// Provider gated on an API key. Real generation is not wired up, so a
/// configured key still yields the placeholder image.
pub struct PlaceholderImages {
    api_key: Option<String>,
}

impl PlaceholderImages {
    pub fn new(api_key: Option<String>) -> Self {
        let api_key = api_key.filter(|key| !key.trim().is_empty() && key != SAMPLE_API_KEY);
        PlaceholderImages { api_key }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

impl ImageProvider for PlaceholderImages {
    fn generate(&self, prompt: &str) -> Result<String, ImageError> {
        if !self.is_configured() {
            return Err(ImageError::NotConfigured);
        }
        Ok(placeholder_image_url(prompt))
    }
}

/// Ask the provider for an image, falling back to the placeholder on any error
pub fn image_for(provider: &dyn ImageProvider, prompt: &str) -> String {
    provider.generate(prompt).unwrap_or_else(|e| {
        warn!("Using placeholder image due to API error: {}", e);
        placeholder_image_url(prompt)
    })
}
