use std::collections::HashSet;
use std::path::Path;
use crate::errors::QuipsterError;
use super::types::{AuthMode, QuipsterConfig};
use super::schema::CONFIG_SCHEMA;
use tracing::{info, warn};

/// Load the config file if one was given, otherwise start from defaults.
pub async fn load_config(path: Option<&Path>) -> Result<QuipsterConfig, QuipsterError> {
    match path {
        Some(path) => parse_config(path).await,
        None => {
            info!("No config file given, using defaults and environment");
            let config = QuipsterConfig::default();
            validate_semantics(&config)?;
            Ok(config)
        }
    }
}

pub async fn parse_config(path: &Path) -> Result<QuipsterConfig, QuipsterError> {
    if !path.exists() {
        return Err(QuipsterError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(QuipsterError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let yaml: serde_yaml::Value = serde_yaml::from_str(&content)?;

    // An empty file is a valid, all-defaults config
    if yaml.is_null() {
        return Ok(QuipsterConfig::default());
    }

    validate_schema(&yaml)?;

    let config: QuipsterConfig = serde_yaml::from_value(yaml)?;

    validate_semantics(&config)?;

    Ok(config)
}

/// Validate config against the JSON schema for structural correctness.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), QuipsterError> {
    let json_str = serde_json::to_string(yaml)
        .map_err(|e| QuipsterError::Config(format!("Config conversion error: {}", e)))?;
    let json_value: serde_json::Value = serde_json::from_str(&json_str)
        .map_err(|e| QuipsterError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| QuipsterError::Config(format!("Schema compilation error: {}", e)))?;

    if let Err(errors) = compiled.validate(&json_value) {
        // Advisory: typed deserialization and the semantic checks are authoritative
        for e in errors {
            warn!(validation_error = %format!("{} at {}", e, e.instance_path), "Config schema warning");
        }
    }

    Ok(())
}

/// Reject configs that parse but cannot drive the generator.
pub(crate) fn validate_semantics(config: &QuipsterConfig) -> Result<(), QuipsterError> {
    if config.provider.timeout_secs == 0 {
        return Err(QuipsterError::Config("provider.timeout_secs must be at least 1".into()));
    }

    if config.provider.name == "openai-compatible" && config.provider.base_url.is_none() {
        return Err(QuipsterError::Config(
            "provider.base_url is required for openai-compatible providers".into(),
        ));
    }

    let mut seen = HashSet::new();
    for candidate in &config.candidates {
        if candidate.model.trim().is_empty() {
            return Err(QuipsterError::Config("Candidate model identifier must not be empty".into()));
        }
        if !seen.insert(candidate.model.as_str()) {
            return Err(QuipsterError::Config(format!(
                "Candidate '{}' is listed more than once",
                candidate.model
            )));
        }
        if let Some(rate) = candidate.cost_per_1k_tokens {
            if !rate.is_finite() || rate < 0.0 {
                return Err(QuipsterError::Config(format!(
                    "Candidate '{}' has invalid cost_per_1k_tokens: {}",
                    candidate.model, rate
                )));
            }
        }
    }

    if config.auth.mode == AuthMode::Static && config.auth.tokens.is_empty() {
        warn!("Static auth configured but no tokens provided; every request will be rejected");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CandidateConfig;
    use std::io::Write;

    fn candidate(model: &str, rate: Option<f64>) -> CandidateConfig {
        CandidateConfig { model: model.to_string(), cost_per_1k_tokens: rate }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_semantics(&QuipsterConfig::default()).is_ok());
    }

    #[test]
    fn test_duplicate_candidates_rejected() {
        let config = QuipsterConfig {
            candidates: vec![candidate("a/model", None), candidate("a/model", Some(0.1))],
            ..Default::default()
        };
        assert!(validate_semantics(&config).is_err());
    }

    #[test]
    fn test_negative_rate_rejected() {
        let config = QuipsterConfig {
            candidates: vec![candidate("a/model", Some(-0.5))],
            ..Default::default()
        };
        assert!(validate_semantics(&config).is_err());
    }

    #[test]
    fn test_nan_rate_rejected() {
        let config = QuipsterConfig {
            candidates: vec![candidate("a/model", Some(f64::NAN))],
            ..Default::default()
        };
        assert!(validate_semantics(&config).is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = QuipsterConfig::default();
        config.provider.timeout_secs = 0;
        assert!(validate_semantics(&config).is_err());
    }

    #[test]
    fn test_openai_compatible_requires_base_url() {
        let mut config = QuipsterConfig::default();
        config.provider.name = "openai-compatible".to_string();
        assert!(validate_semantics(&config).is_err());
        config.provider.base_url = Some("http://localhost:11434/v1".to_string());
        assert!(validate_semantics(&config).is_ok());
    }

    #[tokio::test]
    async fn test_parse_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
provider:
  name: openrouter
  api_key: $OPENROUTER_API_KEY
  timeout_secs: 10
candidates:
  - model: mistralai/mistral-small-latest
  - model: custom/model
    cost_per_1k_tokens: 0.05
auth:
  mode: static
  tokens:
    dev-token: user-1
server:
  port: 9090
"#
        )
        .unwrap();

        let config = parse_config(file.path()).await.unwrap();
        assert_eq!(config.provider.timeout_secs, 10);
        assert_eq!(config.candidates.len(), 2);
        assert_eq!(config.candidates[1].cost_per_1k_tokens, Some(0.05));
        assert_eq!(config.auth.mode, AuthMode::Static);
        assert_eq!(config.auth.tokens["dev-token"], "user-1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[tokio::test]
    async fn test_parse_empty_file_gives_defaults() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = parse_config(file.path()).await.unwrap();
        assert_eq!(config.provider.name, "openrouter");
        assert!(config.candidates.is_empty());
    }

    #[tokio::test]
    async fn test_parse_missing_file() {
        let err = parse_config(Path::new("/nonexistent/quipster.yaml")).await.unwrap_err();
        assert!(matches!(err, QuipsterError::Config(_)));
    }

    #[tokio::test]
    async fn test_parse_invalid_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "candidates: [unclosed").unwrap();
        assert!(matches!(parse_config(file.path()).await, Err(QuipsterError::Yaml(_))));
    }
}
