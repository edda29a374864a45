use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use crate::config::{credentials, AuthMode, QuipsterConfig};
use crate::errors::QuipsterError;
use super::{StaticTokenVerifier, SupabaseVerifier};

pub type UserId = String;

/// Turns a bearer token into the id of the user it belongs to.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Any rejection is `QuipsterError::Authentication`.
    async fn verify(&self, token: &str) -> Result<UserId, QuipsterError>;

    fn verifier_name(&self) -> &str;
}

const VERIFY_TIMEOUT: Duration = Duration::from_secs(10);

pub fn create_verifier(config: &QuipsterConfig) -> Result<Arc<dyn TokenVerifier>, QuipsterError> {
    match config.auth.mode {
        AuthMode::Supabase => {
            let url = credentials::resolve_with_fallback(config.auth.supabase_url.as_deref(), "SUPABASE_URL")
                .ok_or_else(|| QuipsterError::Config(
                    "Supabase auth needs auth.supabase_url or SUPABASE_URL".into(),
                ))?;
            let anon_key = credentials::resolve_with_fallback(config.auth.anon_key.as_deref(), "SUPABASE_ANON_KEY")
                .ok_or_else(|| QuipsterError::Config(
                    "Supabase auth needs auth.anon_key or SUPABASE_ANON_KEY".into(),
                ))?;
            Ok(Arc::new(SupabaseVerifier::new(&url, &anon_key, VERIFY_TIMEOUT)?))
        }
        AuthMode::Static => Ok(Arc::new(StaticTokenVerifier::new(config.auth.tokens.clone()))),
    }
}
