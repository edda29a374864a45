use super::types::QuipsterError;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    /// Expected per-model failure (transport, status, payload). Every provider
    /// error still fails over to the next candidate; this only picks the log level.
    pub candidate_failure: bool,
}

impl QuipsterError {
    /// Classify this error by type and by whether it is an expected per-model failure.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            // Expected per-model failures
            QuipsterError::Network(_) => ErrorClassification {
                error_type: "NetworkError",
                candidate_failure: true,
            },
            QuipsterError::Timeout(_) => ErrorClassification {
                error_type: "TimeoutError",
                candidate_failure: true,
            },
            QuipsterError::ProviderStatus { status: 429, .. } => ErrorClassification {
                error_type: "RateLimitError",
                candidate_failure: true,
            },
            QuipsterError::ProviderStatus { .. } => ErrorClassification {
                error_type: "ProviderStatusError",
                candidate_failure: true,
            },
            QuipsterError::MalformedResponse(_) => ErrorClassification {
                error_type: "MalformedResponseError",
                candidate_failure: true,
            },
            QuipsterError::EmptyCompletion(_) => ErrorClassification {
                error_type: "EmptyCompletionError",
                candidate_failure: true,
            },
            QuipsterError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                candidate_failure: true,
            },

            // Unexpected from a provider
            QuipsterError::Config(_) => ErrorClassification {
                error_type: "ConfigError",
                candidate_failure: false,
            },
            QuipsterError::Validation(_) => ErrorClassification {
                error_type: "ValidationError",
                candidate_failure: false,
            },
            QuipsterError::Authentication(_) => ErrorClassification {
                error_type: "AuthenticationError",
                candidate_failure: false,
            },
            QuipsterError::AllCandidatesExhausted(_) => ErrorClassification {
                error_type: "AllCandidatesExhaustedError",
                candidate_failure: false,
            },
            QuipsterError::Cancelled => ErrorClassification {
                error_type: "CancelledError",
                candidate_failure: false,
            },
            QuipsterError::NotFound(_) => ErrorClassification {
                error_type: "NotFoundError",
                candidate_failure: false,
            },
            QuipsterError::Database(_) => ErrorClassification {
                error_type: "DatabaseError",
                candidate_failure: false,
            },
            QuipsterError::Io(_) => ErrorClassification {
                error_type: "IoError",
                candidate_failure: false,
            },
            QuipsterError::Yaml(_) => ErrorClassification {
                error_type: "YamlError",
                candidate_failure: false,
            },
            QuipsterError::Internal(_) => ErrorClassification {
                error_type: "InternalError",
                candidate_failure: false,
            },
        }
    }
}
