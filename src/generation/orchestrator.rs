use std::sync::Arc;
use std::time::Duration;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::errors::{CandidateFailure, QuipsterError};
use crate::llm::{CompletionProvider, CompletionRequest};
use crate::prompts::build_joke_prompt;
use super::candidate::ModelCandidate;
use super::cost::estimate_cost;
use super::request::GenerationRequest;

pub const SYSTEM_PROMPT: &str = "You are a professional comedian who creates funny, clever jokes. \
Your jokes are witty, appropriate, and make people laugh.";
pub const TEMPERATURE: f32 = 0.8;
pub const MAX_TOKENS: u32 = 300;
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationResult {
    pub text: String,
    pub model_used: String,
    pub tokens_used: u64,
    pub cost_usd: f64,
}

/// Walks the candidate chain in order until one model produces a joke.
pub struct JokeGenerator {
    provider: Arc<dyn CompletionProvider>,
    candidates: Arc<[ModelCandidate]>,
    call_timeout: Duration,
}

impl JokeGenerator {
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        candidates: Vec<ModelCandidate>,
    ) -> Result<Self, QuipsterError> {
        if candidates.is_empty() {
            return Err(QuipsterError::Config("Candidate model list is empty".into()));
        }
        Ok(Self {
            provider,
            candidates: candidates.into(),
            call_timeout: DEFAULT_CALL_TIMEOUT,
        })
    }

    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = timeout;
        self
    }

    pub fn candidates(&self) -> &[ModelCandidate] {
        &self.candidates
    }

    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }

    pub async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult, QuipsterError> {
        self.generate_with_cancel(request, &CancellationToken::new()).await
    }

    /// Like [`generate`](Self::generate), but stops at the first cancellation
    /// signal. The in-flight call is dropped and no later candidate is tried.
    ///
    /// Any error from a candidate moves on to the next one; only cancellation
    /// ends the walk early.
    pub async fn generate_with_cancel(
        &self,
        request: &GenerationRequest,
        cancel: &CancellationToken,
    ) -> Result<GenerationResult, QuipsterError> {
        request.validate()?;

        let user_prompt = build_joke_prompt(
            &request.topic,
            request.style.as_str(),
            request.category.as_deref(),
        );
        debug!(prompt = %user_prompt, "Built joke prompt");

        let mut failures = Vec::with_capacity(self.candidates.len());

        for (index, candidate) in self.candidates.iter().enumerate() {
            if cancel.is_cancelled() {
                info!(attempted = index, "Generation cancelled");
                return Err(QuipsterError::Cancelled);
            }

            debug!(
                model = %candidate.model,
                attempt = index + 1,
                of = self.candidates.len(),
                "Trying candidate"
            );

            let outcome = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    info!(model = %candidate.model, "Generation cancelled mid-call");
                    return Err(QuipsterError::Cancelled);
                }
                outcome = self.attempt(candidate, &user_prompt) => outcome,
            };

            match outcome {
                Ok(result) => {
                    info!(
                        model = %result.model_used,
                        tokens = result.tokens_used,
                        cost_usd = result.cost_usd,
                        failed_before = failures.len(),
                        "Joke generated"
                    );
                    return Ok(result);
                }
                Err(e) => {
                    let failure = CandidateFailure::from_error(&candidate.model, &e);
                    if e.classify().candidate_failure {
                        warn!(
                            model = %failure.model,
                            kind = failure.kind,
                            status = ?failure.status,
                            error = %failure.reason,
                            "Candidate failed, trying next"
                        );
                    } else {
                        error!(
                            model = %failure.model,
                            kind = failure.kind,
                            error = %failure.reason,
                            "Unexpected candidate error, trying next"
                        );
                    }
                    failures.push(failure);
                }
            }
        }

        error!(
            candidates = failures.len(),
            failures = ?failures.iter().map(|f| f.to_string()).collect::<Vec<_>>(),
            "All candidate models failed"
        );
        Err(QuipsterError::AllCandidatesExhausted(failures))
    }

    async fn attempt(
        &self,
        candidate: &ModelCandidate,
        user_prompt: &str,
    ) -> Result<GenerationResult, QuipsterError> {
        let request = CompletionRequest {
            system_prompt: SYSTEM_PROMPT,
            user_prompt,
            model: &candidate.model,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let completion = tokio::time::timeout(self.call_timeout, self.provider.complete(request))
            .await
            .map_err(|_| {
                QuipsterError::Timeout(format!(
                    "{} did not answer within {}s",
                    candidate.model,
                    self.call_timeout.as_secs_f64()
                ))
            })??;

        let text = completion.text.trim();
        if text.is_empty() {
            return Err(QuipsterError::EmptyCompletion(candidate.model.clone()));
        }

        let tokens_used = completion.total_tokens.unwrap_or(0);
        Ok(GenerationResult {
            text: text.to_string(),
            model_used: candidate.model.clone(),
            tokens_used,
            cost_usd: estimate_cost(tokens_used, candidate.cost_per_1k_tokens),
        })
    }
}
