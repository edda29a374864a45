use std::collections::HashMap;
use async_trait::async_trait;
use crate::errors::QuipsterError;
use super::verifier::{TokenVerifier, UserId};

/// Fixed token table from configuration.
pub struct StaticTokenVerifier {
    tokens: HashMap<String, UserId>,
}

impl StaticTokenVerifier {
    pub fn new(tokens: HashMap<String, UserId>) -> Self {
        Self { tokens }
    }
}

#[async_trait]
impl TokenVerifier for StaticTokenVerifier {
    async fn verify(&self, token: &str) -> Result<UserId, QuipsterError> {
        self.tokens
            .get(token)
            .cloned()
            .ok_or_else(|| QuipsterError::Authentication("Unknown token".into()))
    }

    fn verifier_name(&self) -> &str {
        "static"
    }
}
