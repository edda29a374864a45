/// Fallback price when a configured model has no catalog entry and no explicit rate.
pub const DEFAULT_COST_PER_1K_TOKENS: f64 = 0.001;

pub struct ModelInfo {
    pub id: &'static str,
    pub label: &'static str,
    /// Approximate blended USD price per 1k tokens.
    pub cost_per_1k_tokens: f64,
    /// Part of the built-in fallback chain, in catalog order.
    pub default_candidate: bool,
}

pub struct ProviderInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub env_var: &'static str,
    pub base_url: &'static str,
    pub models: &'static [ModelInfo],
}

pub static PROVIDERS: &[ProviderInfo] = &[
    ProviderInfo {
        id: "openrouter",
        name: "OpenRouter",
        env_var: "OPENROUTER_API_KEY",
        base_url: super::openrouter::OPENROUTER_BASE_URL,
        models: &[
            ModelInfo { id: "mistralai/mistral-small-latest", label: "Mistral Small", cost_per_1k_tokens: 0.001, default_candidate: true },
            ModelInfo { id: "meta-llama/llama-3.1-8b-instruct", label: "Llama 3.1 8B Instruct", cost_per_1k_tokens: 0.0002, default_candidate: true },
            ModelInfo { id: "google/gemini-2.5-flash", label: "Gemini 2.5 Flash", cost_per_1k_tokens: 0.0006, default_candidate: false },
            ModelInfo { id: "openai/gpt-4o-mini", label: "GPT-4o Mini", cost_per_1k_tokens: 0.0004, default_candidate: false },
        ],
    },
];

pub fn get_provider(id: &str) -> Option<&'static ProviderInfo> {
    PROVIDERS.iter().find(|p| p.id == id)
}

/// Catalog price for a model id, searched across all providers.
pub fn known_rate(model: &str) -> Option<f64> {
    PROVIDERS.iter()
        .flat_map(|p| p.models.iter())
        .find(|m| m.id == model)
        .map(|m| m.cost_per_1k_tokens)
}

/// Display name for a catalog model.
pub fn label_for(model: &str) -> Option<&'static str> {
    PROVIDERS.iter()
        .flat_map(|p| p.models.iter())
        .find(|m| m.id == model)
        .map(|m| m.label)
}

/// Rate for `model`, falling back to [`DEFAULT_COST_PER_1K_TOKENS`] for unknown models.
pub fn rate_for(model: &str) -> f64 {
    known_rate(model).unwrap_or(DEFAULT_COST_PER_1K_TOKENS)
}

/// Built-in fallback chain for a provider, in preference order.
pub fn default_candidates(provider_id: &str) -> Vec<&'static ModelInfo> {
    get_provider(provider_id)
        .map(|p| p.models.iter().filter(|m| m.default_candidate).collect())
        .unwrap_or_default()
}
