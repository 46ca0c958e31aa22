//! Client configuration with hosted-inference defaults.

use std::time::Duration;

use thiserror::Error;

/// Hosted inference API base URL. Model ids are appended as path segments.
pub const DEFAULT_ENDPOINT: &str = "https://api-inference.huggingface.co/models";

/// Fake-news text classifier.
pub const DEFAULT_TEXT_MODEL: &str = "michelecafagna26/bert-fake-news-detection";

/// Deepfake image classifier.
pub const DEFAULT_IMAGE_MODEL: &str = "prithivMLmods/Deep-Fake-Detector-v2-Model";

/// Cold-starting models routinely take tens of seconds.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Text inputs are cut to this many characters before sending.
pub const MAX_INPUT_CHARS: usize = 512;

/// Error bodies are cut to this many characters in failure messages.
pub const MAX_ERROR_BODY_CHARS: usize = 200;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("inference endpoint must not be empty")]
    EmptyEndpoint,

    #[error("{which} model id must not be empty")]
    EmptyModel { which: &'static str },

    #[error("request timeout must be greater than zero")]
    ZeroTimeout,

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Where and how to reach the remote classifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL, e.g. `https://api-inference.huggingface.co/models`.
    pub endpoint: String,
    /// Model id used by text analysis.
    pub text_model: String,
    /// Model id used by image analysis.
    pub image_model: String,
    /// Bound on the whole request, including reading the body.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::EmptyEndpoint);
        }
        if self.text_model.trim().is_empty() {
            return Err(ConfigError::EmptyModel { which: "text" });
        }
        if self.image_model.trim().is_empty() {
            return Err(ConfigError::EmptyModel { which: "image" });
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    /// `"{endpoint}/{model}"`, tolerating a trailing slash on the endpoint.
    pub fn model_url(&self, model: &str) -> String {
        format!(
            "{}/{}",
            self.endpoint.trim_end_matches('/'),
            model.trim_start_matches('/')
        )
    }
}
