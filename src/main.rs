use std::path::Path;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use quipster::{cli, config, errors};

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    if cli.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(!cli.no_color)
            .with_writer(std::io::stderr)
            .init();
    }

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        let exit_code = match &e {
            errors::QuipsterError::Config(_) => 2,
            errors::QuipsterError::Authentication(_) => 4,
            errors::QuipsterError::Validation(_) => 5,
            _ => 1,
        };
        std::process::exit(exit_code);
    }
}

async fn run(cli: cli::Cli) -> Result<(), errors::QuipsterError> {
    if let cli::Commands::Validate(args) = cli.command {
        return cli::validate::handle_validate(args).await;
    }

    let config = config::load_config(cli.config.as_deref().map(Path::new)).await?;

    match cli.command {
        cli::Commands::Serve(args) => cli::serve::handle_serve(args, config).await,
        cli::Commands::Generate(args) => cli::generate::handle_generate(args, config).await,
        cli::Commands::Models(args) => cli::models::handle_models(args, config).await,
        cli::Commands::Validate(args) => cli::validate::handle_validate(args).await,
    }
}
