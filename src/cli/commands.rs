use clap::{Parser, Subcommand, Args};

#[derive(Parser)]
#[command(
    name = "quipster",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("QUIPSTER_GIT_HASH"), ")"),
    about = "Joke generation service with ordered model fallback"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// YAML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP REST API server
    Serve(ServeArgs),
    /// Generate a single joke from the command line
    Generate(GenerateArgs),
    /// List the candidate models in fallback order
    Models(ModelsArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Listen port (overrides server.port)
    #[arg(long)]
    pub port: Option<u16>,

    /// Listen address (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// SQLite database path (overrides server.db)
    #[arg(long)]
    pub db: Option<String>,
}

#[derive(Args, Clone)]
pub struct GenerateArgs {
    /// What the joke is about
    #[arg(short, long)]
    pub topic: String,

    /// Joke style: pun, one-liner, dad-joke, dark, observational
    #[arg(short, long, default_value = "one-liner")]
    pub style: String,

    /// Optional category hint
    #[arg(long)]
    pub category: Option<String>,

    /// Print the full result as JSON
    #[arg(long)]
    pub json: bool,

    /// Save the joke to this user's history
    #[arg(long)]
    pub save_as: Option<String>,

    /// SQLite database path used with --save-as (overrides server.db)
    #[arg(long)]
    pub db: Option<String>,
}

#[derive(Args, Clone)]
pub struct ModelsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub file: String,
}
