//! The typed result of one analysis, exchanged between the client and its caller.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::prediction::ProbabilityPair;

/// Three-way human-facing verdict derived from a [`ProbabilityPair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictKind {
    /// Real-leaning probability cleared the verdict threshold.
    Authentic,
    /// Fake-leaning probability cleared the verdict threshold.
    Fake,
    /// Neither class is confident enough, or there was no signal at all.
    Uncertain,
}

impl VerdictKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Authentic => "authentic",
            Self::Fake => "fake",
            Self::Uncertain => "uncertain",
        }
    }
}

impl fmt::Display for VerdictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every way an analysis can fail. Each failure path maps to exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// No credential was configured; no request was sent.
    MissingCredential,
    /// DNS, connect, timeout, or body read failure.
    NetworkFailure,
    /// HTTP 503: the remote model is cold-starting. Routine, not a fault.
    ModelWarming,
    /// HTTP 401.
    Unauthorized,
    /// Any other non-2xx status.
    RemoteError,
    /// 2xx body that is not JSON, or carries an embedded `error` field.
    MalformedResponse,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingCredential => "missing_credential",
            Self::NetworkFailure => "network_failure",
            Self::ModelWarming => "model_warming",
            Self::Unauthorized => "unauthorized",
            Self::RemoteError => "remote_error",
            Self::MalformedResponse => "malformed_response",
        }
    }

    /// Whether asking the user to simply try again is the right response.
    ///
    /// Nothing in the core retries on its own.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ModelWarming | Self::NetworkFailure)
    }

    /// Short presentation hint for the caller.
    pub fn hint(&self) -> &'static str {
        match self {
            Self::MissingCredential | Self::Unauthorized => "check credentials",
            Self::ModelWarming => "the model is warming up, try again in a few seconds",
            Self::NetworkFailure => "network problem, try again",
            Self::RemoteError => "the inference service reported an error",
            Self::MalformedResponse => "the inference service returned an unexpected response",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one analysis. Exactly one variant is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Success {
        pair: ProbabilityPair,
        verdict: VerdictKind,
    },
    Failure {
        kind: ErrorKind,
        message: String,
    },
}

impl Outcome {
    pub fn success(pair: ProbabilityPair, verdict: VerdictKind) -> Self {
        Self::Success { pair, verdict }
    }

    pub fn failure(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::Failure {
            kind,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn verdict(&self) -> Option<VerdictKind> {
        match self {
            Self::Success { verdict, .. } => Some(*verdict),
            Self::Failure { .. } => None,
        }
    }

    pub fn pair(&self) -> Option<ProbabilityPair> {
        match self {
            Self::Success { pair, .. } => Some(*pair),
            Self::Failure { .. } => None,
        }
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { kind, .. } => Some(*kind),
        }
    }
}
