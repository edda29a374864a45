use serde::{Deserialize, Serialize};
use crate::errors::QuipsterError;
use crate::generation::{GenerationRequest, GenerationResult};

/// A generated joke about to be written to history.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJoke {
    pub user_id: String,
    pub content: String,
    pub topic: String,
    pub joke_type: String,
    pub category: Option<String>,
    pub model_used: String,
    pub tokens_used: u64,
    pub cost_usd: f64,
}

impl NewJoke {
    pub fn from_generation(user_id: &str, request: &GenerationRequest, result: &GenerationResult) -> Self {
        Self {
            user_id: user_id.to_string(),
            content: result.text.clone(),
            topic: request.topic.clone(),
            joke_type: request.style.as_str().to_string(),
            category: request.category.clone(),
            model_used: result.model_used.clone(),
            tokens_used: result.tokens_used,
            cost_usd: result.cost_usd,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredJoke {
    pub id: String,
    pub user_id: String,
    pub content: String,
    pub topic: String,
    pub joke_type: String,
    pub category: Option<String>,
    pub model_used: String,
    pub tokens_used: u64,
    pub cost_usd: f64,
    pub user_rating: Option<u8>,
    pub favorited: bool,
    pub shared: bool,
    /// RFC 3339 timestamp
    pub created_at: String,
}

/// Partial update of the user-editable fields of a stored joke.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JokeUpdate {
    #[serde(default, alias = "user_rating")]
    pub user_rating: Option<u8>,
    #[serde(default)]
    pub favorited: Option<bool>,
    #[serde(default)]
    pub shared: Option<bool>,
}

impl JokeUpdate {
    pub fn validate(&self) -> Result<(), QuipsterError> {
        if let Some(rating) = self.user_rating {
            if !(1..=5).contains(&rating) {
                return Err(QuipsterError::Validation(format!(
                    "Rating must be between 1 and 5, got {}",
                    rating
                )));
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.user_rating.is_none() && self.favorited.is_none() && self.shared.is_none()
    }
}
