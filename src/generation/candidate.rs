use serde::Serialize;
use crate::config::{CandidateConfig, QuipsterConfig};
use crate::errors::QuipsterError;
use crate::llm::catalog;

/// One model in the fallback chain with the rate used to price its output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelCandidate {
    pub model: String,
    pub cost_per_1k_tokens: f64,
}

impl ModelCandidate {
    pub fn new(model: &str, cost_per_1k_tokens: f64) -> Self {
        Self { model: model.to_string(), cost_per_1k_tokens }
    }

    /// Candidate priced from the catalog, or the default rate for unknown models.
    pub fn with_catalog_rate(model: &str) -> Self {
        Self::new(model, catalog::rate_for(model))
    }

    fn from_config(config: &CandidateConfig) -> Self {
        match config.cost_per_1k_tokens {
            Some(rate) => Self::new(&config.model, rate),
            None => Self::with_catalog_rate(&config.model),
        }
    }
}

/// Resolve the ordered fallback chain: the configured list, or the catalog
/// defaults for the provider when none is configured.
pub fn candidates_from_config(config: &QuipsterConfig) -> Result<Vec<ModelCandidate>, QuipsterError> {
    let candidates: Vec<ModelCandidate> = if config.candidates.is_empty() {
        catalog::default_candidates(&config.provider.name)
            .into_iter()
            .map(|m| ModelCandidate::new(m.id, m.cost_per_1k_tokens))
            .collect()
    } else {
        config.candidates.iter().map(ModelCandidate::from_config).collect()
    };

    if candidates.is_empty() {
        return Err(QuipsterError::Config(format!(
            "No candidate models configured and provider '{}' has no defaults",
            config.provider.name
        )));
    }
    Ok(candidates)
}
