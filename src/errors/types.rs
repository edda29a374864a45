use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuipsterError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Provider returned HTTP {status}: {message}")]
    ProviderStatus { status: u16, message: String },

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("Provider returned an empty completion for {0}")]
    EmptyCompletion(String),

    #[error("All {} candidate models failed", .0.len())]
    AllCandidatesExhausted(Vec<CandidateFailure>),

    #[error("Generation cancelled")]
    Cancelled,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// One failed attempt against a single candidate model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateFailure {
    pub model: String,
    /// Failure class from [`QuipsterError::classify`], e.g. `TimeoutError`.
    pub kind: &'static str,
    /// HTTP status when the provider answered with a non-2xx response.
    pub status: Option<u16>,
    pub reason: String,
}

impl CandidateFailure {
    pub fn from_error(model: &str, error: &QuipsterError) -> Self {
        let status = match error {
            QuipsterError::ProviderStatus { status, .. } => Some(*status),
            _ => None,
        };
        Self {
            model: model.to_string(),
            kind: error.classify().error_type,
            status,
            reason: error.to_string(),
        }
    }
}

impl std::fmt::Display for CandidateFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} [{} {}]: {}", self.model, self.kind, status, self.reason),
            None => write!(f, "{} [{}]: {}", self.model, self.kind, self.reason),
        }
    }
}
