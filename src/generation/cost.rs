/// Approximate USD cost of `tokens` at a per-1k-token rate.
pub fn estimate_cost(tokens: u64, cost_per_1k_tokens: f64) -> f64 {
    (tokens as f64 / 1000.0) * cost_per_1k_tokens
}
