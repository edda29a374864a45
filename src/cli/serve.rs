use crate::cli::commands::ServeArgs;
use crate::config::QuipsterConfig;
use crate::errors::QuipsterError;
use crate::api;
use tracing::info;

pub async fn handle_serve(args: ServeArgs, mut config: QuipsterConfig) -> Result<(), QuipsterError> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(db) = args.db {
        config.server.db = db;
    }

    info!(
        host = %config.server.host,
        port = config.server.port,
        provider = %config.provider.name,
        auth = %config.auth.mode,
        "Starting API server"
    );

    let state = api::create_app_state(&config, &config.server.db)?;
    let app = api::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down");
        })
        .await
        .map_err(|e| QuipsterError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
