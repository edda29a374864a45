use std::path::PathBuf;
use crate::cli::commands::ValidateArgs;
use crate::config;
use crate::errors::QuipsterError;
use crate::generation::candidates_from_config;

pub async fn handle_validate(args: ValidateArgs) -> Result<(), QuipsterError> {
    let path = PathBuf::from(&args.file);
    let config = config::parse_config(&path).await?;
    let candidates = candidates_from_config(&config)?;
    println!(
        "Configuration is valid: {} (provider {}, {} candidate model{}, {} auth)",
        args.file,
        config.provider.name,
        candidates.len(),
        if candidates.len() == 1 { "" } else { "s" },
        config.auth.mode,
    );
    Ok(())
}
