pub mod candidate;
pub mod cost;
pub mod orchestrator;
pub mod request;
pub mod service;

pub use candidate::{candidates_from_config, ModelCandidate};
pub use cost::estimate_cost;
pub use orchestrator::{GenerationResult, JokeGenerator};
pub use request::{GenerationRequest, JokeRequest};
pub use service::{JokeOutcome, JokePage, JokeService, NOT_SAVED_WARNING};

use std::time::Duration;
use crate::config::QuipsterConfig;
use crate::errors::QuipsterError;

/// Wire the configured provider and candidate chain into a generator.
pub fn build_generator(config: &QuipsterConfig) -> Result<JokeGenerator, QuipsterError> {
    let provider = crate::llm::create_provider(config)?;
    let candidates = candidates_from_config(config)?;
    Ok(JokeGenerator::new(provider, candidates)?
        .with_call_timeout(Duration::from_secs(config.provider.timeout_secs)))
}
