use tracing::debug;

/// Resolve a credential value. If the value starts with '$', treat it as an
/// environment variable reference and resolve from the environment.
pub fn resolve_credential(value: &str) -> Option<String> {
    if let Some(var_name) = value.strip_prefix('$') {
        match std::env::var(var_name) {
            Ok(resolved) if !resolved.is_empty() => {
                debug!(var = %var_name, "Resolved credential from environment");
                Some(resolved)
            }
            _ => {
                debug!(var = %var_name, "Environment variable not set");
                None
            }
        }
    } else if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Resolve a configured credential, falling back to `env_var` when the config
/// leaves it unset.
pub fn resolve_with_fallback(configured: Option<&str>, env_var: &str) -> Option<String> {
    configured
        .and_then(resolve_credential)
        .or_else(|| {
            if env_var.is_empty() {
                return None;
            }
            std::env::var(env_var).ok().filter(|v| !v.is_empty())
        })
}
