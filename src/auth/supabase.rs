use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use crate::errors::QuipsterError;
use super::verifier::{TokenVerifier, UserId};

/// Verifies access tokens against a Supabase project's auth endpoint.
pub struct SupabaseVerifier {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseVerifier {
    pub fn new(base_url: &str, anon_key: &str, timeout: Duration) -> Result<Self, QuipsterError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| QuipsterError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        })
    }
}

#[async_trait]
impl TokenVerifier for SupabaseVerifier {
    async fn verify(&self, token: &str) -> Result<UserId, QuipsterError> {
        let response = self.client
            .get(format!("{}/auth/v1/user", self.base_url))
            .header("apikey", &self.anon_key)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| QuipsterError::Authentication(format!("Auth service unreachable: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "Token rejected by auth service");
            return Err(QuipsterError::Authentication(format!("Auth service returned {}", status.as_u16())));
        }

        let body: Value = response.json().await
            .map_err(|e| QuipsterError::Authentication(format!("Unreadable auth response: {}", e)))?;

        body["id"]
            .as_str()
            .filter(|id| !id.is_empty())
            .map(|id| id.to_string())
            .ok_or_else(|| QuipsterError::Authentication("Auth response has no user id".into()))
    }

    fn verifier_name(&self) -> &str {
        "supabase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn verifier(url: &str) -> SupabaseVerifier {
        SupabaseVerifier::new(url, "anon-key", Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_valid_token_yields_user_id() {
        let mut server = mockito::Server::new_async().await;
        let mock = server.mock("GET", "/auth/v1/user")
            .match_header("apikey", "anon-key")
            .match_header("authorization", "Bearer good-token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"user-123","email":"a@example.com"}"#)
            .create_async()
            .await;

        let user = verifier(&server.url()).verify("good-token").await.unwrap();
        assert_eq!(user, "user-123");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_rejected_token() {
        let mut server = mockito::Server::new_async().await;
        server.mock("GET", "/auth/v1/user")
            .with_status(401)
            .with_body(r#"{"msg":"invalid JWT"}"#)
            .create_async()
            .await;

        let err = verifier(&server.url()).verify("bad").await.unwrap_err();
        assert!(matches!(err, QuipsterError::Authentication(_)));
    }

    #[tokio::test]
    async fn test_missing_id_rejected() {
        let mut server = mockito::Server::new_async().await;
        server.mock("GET", "/auth/v1/user")
            .match_header("authorization", Matcher::Any)
            .with_status(200)
            .with_body(r#"{"email":"a@example.com"}"#)
            .create_async()
            .await;

        assert!(verifier(&server.url()).verify("tok").await.is_err());
    }
}
