use serde::{Deserialize, Serialize};
use crate::errors::QuipsterError;
use crate::prompts::JokeStyle;

/// A joke request as it arrives from transport, before validation.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct JokeRequest {
    pub topic: Option<String>,
    #[serde(alias = "jokeType", alias = "joke_type")]
    pub style: Option<String>,
    pub category: Option<String>,
}

/// A validated request: non-blank topic, recognized style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    pub topic: String,
    pub style: JokeStyle,
    pub category: Option<String>,
}

impl GenerationRequest {
    pub fn new(topic: &str, style: JokeStyle, category: Option<&str>) -> Result<Self, QuipsterError> {
        let request = Self {
            topic: topic.trim().to_string(),
            style,
            category: category
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
        };
        request.validate()?;
        Ok(request)
    }

    /// Precondition for generation. Fields are public, so the orchestrator
    /// re-checks before it spends a provider call.
    pub fn validate(&self) -> Result<(), QuipsterError> {
        if self.topic.trim().is_empty() {
            return Err(QuipsterError::Validation("Missing required field: topic".into()));
        }
        Ok(())
    }
}

impl TryFrom<JokeRequest> for GenerationRequest {
    type Error = QuipsterError;

    fn try_from(raw: JokeRequest) -> Result<Self, Self::Error> {
        let topic = raw.topic.as_deref().map(str::trim).unwrap_or("");
        let style = raw.style.as_deref().map(str::trim).unwrap_or("");
        if topic.is_empty() || style.is_empty() {
            return Err(QuipsterError::Validation(
                "Missing required fields: topic, style".into(),
            ));
        }
        let style: JokeStyle = style.parse()?;
        Self::new(topic, style, raw.category.as_deref())
    }
}
