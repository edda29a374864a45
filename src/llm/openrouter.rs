use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use crate::errors::QuipsterError;
use super::provider::CompletionProvider;
use super::types::{Completion, CompletionRequest, Message};
use tracing::debug;

pub const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";

pub struct OpenRouterProvider {
    client: Client,
    api_key: String,
    base_url: String,
    referer: Option<String>,
}

impl OpenRouterProvider {
    pub fn new(api_key: &str, timeout: Duration) -> Result<Self, QuipsterError> {
        Self::with_base_url(api_key, OPENROUTER_BASE_URL, timeout)
    }

    pub fn with_base_url(api_key: &str, base_url: &str, timeout: Duration) -> Result<Self, QuipsterError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| QuipsterError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            referer: None,
        })
    }

    /// OpenRouter uses the referer for app attribution; it is optional.
    pub fn with_referer(mut self, referer: Option<&str>) -> Self {
        self.referer = referer.map(|r| r.to_string());
        self
    }
}

#[async_trait]
impl CompletionProvider for OpenRouterProvider {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<Completion, QuipsterError> {
        let messages = vec![
            Message::system(request.system_prompt),
            Message::user(request.user_prompt),
        ];

        let body = json!({
            "model": request.model,
            "messages": messages,
            "temperature": request.temperature,
            "max_tokens": request.max_tokens,
        });

        let mut builder = self.client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body);
        if let Some(referer) = &self.referer {
            builder = builder.header("HTTP-Referer", referer);
        }

        let resp = builder.send().await.map_err(|e| transport_error(request.model, e))?;

        let status = resp.status();
        let text = resp.text().await.map_err(|e| transport_error(request.model, e))?;

        if !status.is_success() {
            return Err(QuipsterError::ProviderStatus {
                status: status.as_u16(),
                message: error_message(&text),
            });
        }

        let data: Value = serde_json::from_str(&text)
            .map_err(|e| QuipsterError::MalformedResponse(format!("Response is not JSON: {}", e)))?;

        // OpenRouter reports some upstream failures inside a 200 body
        if let Some(error) = data.get("error").filter(|e| !e.is_null()) {
            let code = error["code"].as_u64()
                .and_then(|c| u16::try_from(c).ok())
                .unwrap_or(502);
            return Err(QuipsterError::ProviderStatus {
                status: code,
                message: error["message"].as_str().unwrap_or("Unknown OpenRouter error").to_string(),
            });
        }

        let content = data["choices"][0]["message"]["content"].as_str()
            .ok_or_else(|| QuipsterError::MalformedResponse("No content in OpenRouter response".into()))?
            .to_string();
        let total_tokens = data["usage"]["total_tokens"].as_u64();

        debug!(model = %request.model, total_tokens, "OpenRouter completion");

        Ok(Completion { text: content, total_tokens })
    }

    fn provider_name(&self) -> &str { "openrouter" }
}

fn transport_error(model: &str, e: reqwest::Error) -> QuipsterError {
    if e.is_timeout() {
        QuipsterError::Timeout(format!("OpenRouter request for {} timed out", model))
    } else {
        QuipsterError::Network(format!("OpenRouter request failed: {}", e))
    }
}

/// Pull `error.message` out of an error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(|s| s.to_string()))
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                "Empty error body".to_string()
            } else {
                body.trim().to_string()
            }
        })
}
