use std::sync::Arc;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::db::JokeStore;
use crate::errors::QuipsterError;
use crate::models::{JokeUpdate, NewJoke, StoredJoke};
use super::orchestrator::JokeGenerator;
use super::request::{GenerationRequest, JokeRequest};

pub const NOT_SAVED_WARNING: &str = "Joke generated but not saved to history";

/// What a caller gets back from a generation: the joke, what it cost, and
/// whether it made it into history.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JokeOutcome {
    pub text: String,
    pub model: String,
    pub tokens_used: u64,
    pub cost_usd: f64,
    pub saved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JokePage {
    pub jokes: Vec<StoredJoke>,
    pub total: u64,
}

/// Generation plus per-user history, shared by the HTTP API and the CLI.
pub struct JokeService {
    generator: JokeGenerator,
    store: Arc<dyn JokeStore>,
}

impl JokeService {
    pub fn new(generator: JokeGenerator, store: Arc<dyn JokeStore>) -> Self {
        Self { generator, store }
    }

    pub fn generator(&self) -> &JokeGenerator {
        &self.generator
    }

    pub async fn generate_for_user(
        &self,
        user_id: &str,
        request: JokeRequest,
    ) -> Result<JokeOutcome, QuipsterError> {
        self.generate_for_user_with_cancel(user_id, request, &CancellationToken::new()).await
    }

    pub async fn generate_for_user_with_cancel(
        &self,
        user_id: &str,
        request: JokeRequest,
        cancel: &CancellationToken,
    ) -> Result<JokeOutcome, QuipsterError> {
        let request = GenerationRequest::try_from(request)?;
        let result = self.generator.generate_with_cancel(&request, cancel).await?;
        let new_joke = NewJoke::from_generation(user_id, &request, &result);

        match self.store.save_joke(&new_joke) {
            Ok(stored) => {
                info!(user = %user_id, joke_id = %stored.id, "Saved joke to history");
                Ok(JokeOutcome {
                    text: stored.content,
                    model: stored.model_used,
                    tokens_used: stored.tokens_used,
                    cost_usd: stored.cost_usd,
                    saved: true,
                    id: Some(stored.id),
                    created_at: Some(stored.created_at),
                    warning: None,
                })
            }
            Err(e) => {
                error!(user = %user_id, error = %e, "Failed to save joke to history");
                Ok(JokeOutcome {
                    text: result.text,
                    model: result.model_used,
                    tokens_used: result.tokens_used,
                    cost_usd: result.cost_usd,
                    saved: false,
                    id: None,
                    created_at: None,
                    warning: Some(NOT_SAVED_WARNING.to_string()),
                })
            }
        }
    }

    pub fn list_jokes(&self, user_id: &str, limit: usize, offset: usize) -> Result<JokePage, QuipsterError> {
        Ok(JokePage {
            jokes: self.store.list_jokes(user_id, limit, offset)?,
            total: self.store.count_jokes(user_id)?,
        })
    }

    pub fn get_joke(&self, user_id: &str, id: &str) -> Result<StoredJoke, QuipsterError> {
        self.store
            .get_joke(user_id, id)?
            .ok_or_else(|| QuipsterError::NotFound(format!("Joke {}", id)))
    }

    pub fn update_joke(&self, user_id: &str, id: &str, update: &JokeUpdate) -> Result<StoredJoke, QuipsterError> {
        if update.is_empty() {
            return Err(QuipsterError::Validation(
                "Nothing to update: set userRating, favorited or shared".into(),
            ));
        }
        update.validate()?;
        self.store
            .update_joke(user_id, id, update)?
            .ok_or_else(|| QuipsterError::NotFound(format!("Joke {}", id)))
    }

    pub fn delete_joke(&self, user_id: &str, id: &str) -> Result<(), QuipsterError> {
        if self.store.delete_joke(user_id, id)? {
            info!(user = %user_id, joke_id = %id, "Deleted joke");
            Ok(())
        } else {
            Err(QuipsterError::NotFound(format!("Joke {}", id)))
        }
    }
}
