//! HTTP client for hosted authenticity classifiers.
//!
//! Each call sends exactly one POST, or none when the credential is missing.
//! A 503 is reported as `ModelWarming` and is not retried here.

use reqwest::header::CONTENT_TYPE;
use reqwest::{RequestBuilder, StatusCode};
use serde_json::{Value, json};
use thiserror::Error;
use tracing::{debug, info, warn};
use truthlens_core::{ErrorKind, Outcome};

use crate::config::{ClientConfig, ConfigError, MAX_ERROR_BODY_CHARS, MAX_INPUT_CHARS};

#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("no API credential configured")]
    MissingCredential,
    #[error("{}", describe_transport(.0))]
    Network(#[from] reqwest::Error),
    #[error("remote model is loading, retry shortly")]
    ModelWarming,
    #[error("credential rejected")]
    Unauthorized,
    #[error("{status}: {body}")]
    Remote { status: u16, body: String },
    #[error("response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("provider returned an error: {0}")]
    Embedded(String),
}

impl InferenceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingCredential => ErrorKind::MissingCredential,
            Self::Network(_) => ErrorKind::NetworkFailure,
            Self::ModelWarming => ErrorKind::ModelWarming,
            Self::Unauthorized => ErrorKind::Unauthorized,
            Self::Remote { .. } => ErrorKind::RemoteError,
            Self::Json(_) | Self::Embedded(_) => ErrorKind::MalformedResponse,
        }
    }

    fn from_status(status: StatusCode, body: &str) -> Self {
        match status {
            StatusCode::SERVICE_UNAVAILABLE => Self::ModelWarming,
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            _ => Self::Remote {
                status: status.as_u16(),
                body: truncate_chars(body, MAX_ERROR_BODY_CHARS).to_string(),
            },
        }
    }
}

impl From<InferenceError> for Outcome {
    fn from(err: InferenceError) -> Self {
        Outcome::failure(err.kind(), err.to_string())
    }
}

/// Client for a hosted classification API.
pub struct InferenceClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl InferenceClient {
    /// Validate `config` and build the underlying HTTP client with its timeout.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Classify a text passage.
    ///
    /// The caller is expected to have checked the minimum length already;
    /// the passage is cut to [`MAX_INPUT_CHARS`] before sending.
    pub async fn analyze(&self, input: &str, credential: Option<&str>) -> Outcome {
        let result = self.classify_text(input, credential).await;
        self.finish(&self.config.text_model, result)
    }

    /// Classify raw encoded image bytes.
    pub async fn analyze_image(&self, image: Vec<u8>, credential: Option<&str>) -> Outcome {
        let result = self.classify_image(image, credential).await;
        self.finish(&self.config.image_model, result)
    }

    async fn classify_text(
        &self,
        input: &str,
        credential: Option<&str>,
    ) -> Result<Value, InferenceError> {
        let token = require_credential(credential)?;
        let text = truncate_chars(input, MAX_INPUT_CHARS);
        let url = self.config.model_url(&self.config.text_model);

        info!(
            url = %url,
            chars = text.chars().count(),
            truncated = text.len() < input.len(),
            "requesting text classification"
        );
        let request = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&json!({ "inputs": text }));
        send(request).await
    }

    async fn classify_image(
        &self,
        image: Vec<u8>,
        credential: Option<&str>,
    ) -> Result<Value, InferenceError> {
        let token = require_credential(credential)?;
        let url = self.config.model_url(&self.config.image_model);

        info!(url = %url, bytes = image.len(), "requesting image classification");
        let request = self
            .client
            .post(&url)
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(image);
        send(request).await
    }

    fn finish(&self, model: &str, result: Result<Value, InferenceError>) -> Outcome {
        match result {
            Ok(raw) => {
                let (pair, verdict) = truthlens_ai::evaluate(&raw);
                info!(
                    model,
                    verdict = %verdict,
                    real = pair.real,
                    fake = pair.fake,
                    "classification complete"
                );
                Outcome::success(pair, verdict)
            }
            Err(err) => {
                if err.kind() == ErrorKind::ModelWarming {
                    info!(model, "remote model is warming up");
                } else {
                    warn!(model, kind = %err.kind(), error = %err, "classification failed");
                }
                err.into()
            }
        }
    }
}

async fn send(request: RequestBuilder) -> Result<Value, InferenceError> {
    let resp = request.send().await?;
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(InferenceError::from_status(status, &body));
    }

    let body = resp.bytes().await?;
    let raw: Value = serde_json::from_slice(&body)?;
    if let Some(message) = truthlens_ai::embedded_error(&raw) {
        return Err(InferenceError::Embedded(message));
    }

    debug!(status = status.as_u16(), bytes = body.len(), "received classifier response");
    Ok(raw)
}

fn require_credential(credential: Option<&str>) -> Result<&str, InferenceError> {
    credential
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or(InferenceError::MissingCredential)
}

fn describe_transport(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("request timed out: {err}")
    } else if err.is_connect() {
        format!("could not connect: {err}")
    } else {
        format!("request failed: {err}")
    }
}

/// Cut `s` to at most `max` characters without splitting a character.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
