use serde_json::json;
use crate::cli::commands::ModelsArgs;
use crate::config::QuipsterConfig;
use crate::errors::QuipsterError;
use crate::generation::candidates_from_config;
use crate::llm::catalog;

pub async fn handle_models(args: ModelsArgs, config: QuipsterConfig) -> Result<(), QuipsterError> {
    let candidates = candidates_from_config(&config)?;

    if args.json {
        let value = json!({ "provider": config.provider.name, "models": candidates });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Provider: {}", config.provider.name);
    for (i, candidate) in candidates.iter().enumerate() {
        let label = catalog::label_for(&candidate.model).unwrap_or("custom");
        println!(
            "  {}. {:<40} {:<24} ${:.6} / 1k tokens",
            i + 1,
            candidate.model,
            label,
            candidate.cost_per_1k_tokens
        );
    }
    Ok(())
}
