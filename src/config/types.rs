use std::collections::HashMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct QuipsterConfig {
    pub provider: ProviderConfig,
    /// Ordered fallback chain. Empty means the catalog defaults for the provider.
    pub candidates: Vec<CandidateConfig>,
    pub auth: AuthConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub name: String,
    /// Literal key or `$ENV_VAR` reference. Falls back to the catalog env var.
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub referer: Option<String>,
    /// Upper bound on a single candidate call.
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            name: "openrouter".to_string(),
            api_key: None,
            base_url: None,
            referer: None,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CandidateConfig {
    pub model: String,
    pub cost_per_1k_tokens: Option<f64>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    Supabase,
    Static,
}

impl AuthMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Supabase => "supabase",
            Self::Static => "static",
        }
    }
}

impl std::fmt::Display for AuthMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AuthConfig {
    pub mode: AuthMode,
    /// Falls back to `SUPABASE_URL`.
    pub supabase_url: Option<String>,
    /// Falls back to `SUPABASE_ANON_KEY`.
    pub anon_key: Option<String>,
    /// Bearer token -> user id, used when `mode: static`.
    pub tokens: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub db: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            db: "./data/quipster.db".to_string(),
        }
    }
}
