//! LevelUp command-line entry point.

use clap::Parser;
use levelup::cli::{Cli, Commands, handle_generate_command, handle_languages_command};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => handle_generate_command(args).await,
        Commands::Languages => {
            handle_languages_command();
            Ok(())
        }
    }
}
