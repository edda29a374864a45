use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use crate::cli::commands::GenerateArgs;
use crate::config::QuipsterConfig;
use crate::db::Database;
use crate::errors::QuipsterError;
use crate::generation::{build_generator, GenerationRequest, JokeRequest, JokeService};

pub async fn handle_generate(args: GenerateArgs, config: QuipsterConfig) -> Result<(), QuipsterError> {
    let generator = build_generator(&config)?;

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling generation");
            on_interrupt.cancel();
        }
    });

    let raw = JokeRequest {
        topic: Some(args.topic),
        style: Some(args.style),
        category: args.category,
    };

    match args.save_as {
        Some(user) => {
            let db_path = args.db.unwrap_or_else(|| config.server.db.clone());
            let service = JokeService::new(generator, Arc::new(Database::new(&db_path)?));
            let outcome = service.generate_for_user_with_cancel(&user, raw, &cancel).await?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("{}", outcome.text);
                match (&outcome.id, &outcome.warning) {
                    (Some(id), _) => info!(joke_id = %id, user = %user, "Saved to history"),
                    (None, Some(warning)) => eprintln!("Warning: {}", warning),
                    (None, None) => {}
                }
            }
        }
        None => {
            let request = GenerationRequest::try_from(raw)?;
            let result = generator.generate_with_cancel(&request, &cancel).await?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", result.text);
                info!(model = %result.model_used, tokens = result.tokens_used, cost_usd = result.cost_usd, "Done");
            }
        }
    }

    Ok(())
}
