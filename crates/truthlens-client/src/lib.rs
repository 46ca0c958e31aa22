//! Client layer: one POST per analysis against a hosted classifier, every
//! failure folded into a typed [`Outcome`](truthlens_core::Outcome).

pub mod config;
pub mod http;

pub use config::{
    ClientConfig, ConfigError, DEFAULT_ENDPOINT, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL,
    DEFAULT_TIMEOUT, MAX_ERROR_BODY_CHARS, MAX_INPUT_CHARS,
};
pub use http::{InferenceClient, InferenceError};
