#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use quipster::db::JokeStore;
use quipster::errors::QuipsterError;
use quipster::generation::{JokeGenerator, ModelCandidate};
use quipster::llm::{Completion, CompletionProvider, CompletionRequest};
use quipster::models::{JokeUpdate, NewJoke, StoredJoke};

/// What the scripted provider does on its next call.
pub enum Step {
    Reply(&'static str, Option<u64>),
    Fail(fn() -> QuipsterError),
    /// Never answers; only a timeout or cancellation gets past it.
    Hang,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub model: String,
    pub system_prompt: String,
    pub user_prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Provider double that plays back a fixed script and records every call.
pub struct ScriptedProvider {
    steps: Mutex<VecDeque<Step>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedProvider {
    pub fn new(steps: Vec<Step>) -> Arc<Self> {
        Arc::new(Self {
            steps: Mutex::new(steps.into()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn called_models(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.model).collect()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<Completion, QuipsterError> {
        self.calls.lock().unwrap().push(RecordedCall {
            model: request.model.to_string(),
            system_prompt: request.system_prompt.to_string(),
            user_prompt: request.user_prompt.to_string(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        });

        let step = self.steps.lock().unwrap().pop_front();
        match step {
            Some(Step::Reply(text, total_tokens)) => Ok(Completion { text: text.to_string(), total_tokens }),
            Some(Step::Fail(make)) => Err(make()),
            Some(Step::Hang) => std::future::pending().await,
            None => Err(QuipsterError::Internal("script exhausted".into())),
        }
    }

    fn provider_name(&self) -> &str {
        "scripted"
    }
}

pub fn candidates(specs: &[(&str, f64)]) -> Vec<ModelCandidate> {
    specs.iter().map(|(model, rate)| ModelCandidate::new(model, *rate)).collect()
}

pub fn generator(provider: Arc<ScriptedProvider>, specs: &[(&str, f64)]) -> JokeGenerator {
    JokeGenerator::new(provider, candidates(specs)).unwrap()
}

/// Store whose writes always fail; reads see an empty history.
pub struct FailingStore;

impl JokeStore for FailingStore {
    fn save_joke(&self, _joke: &NewJoke) -> Result<StoredJoke, QuipsterError> {
        Err(QuipsterError::Database("disk full".into()))
    }

    fn get_joke(&self, _user_id: &str, _id: &str) -> Result<Option<StoredJoke>, QuipsterError> {
        Ok(None)
    }

    fn list_jokes(&self, _user_id: &str, _limit: usize, _offset: usize) -> Result<Vec<StoredJoke>, QuipsterError> {
        Ok(Vec::new())
    }

    fn count_jokes(&self, _user_id: &str) -> Result<u64, QuipsterError> {
        Ok(0)
    }

    fn update_joke(&self, _user_id: &str, _id: &str, _update: &JokeUpdate) -> Result<Option<StoredJoke>, QuipsterError> {
        Err(QuipsterError::Database("disk full".into()))
    }

    fn delete_joke(&self, _user_id: &str, _id: &str) -> Result<bool, QuipsterError> {
        Err(QuipsterError::Database("disk full".into()))
    }
}
