//! Decoupled tic-tac-toe server binary.

use anyhow::Result;
use clap::Parser;
use decoupled_tictactoe::ServerConfig;
use decoupled_tictactoe::cli::{Cli, Command, ServerArgs};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match cli.command {
        Command::Serve(args) => {
            let config = resolve_config(args)?;
            info!(host = %config.host(), port = *config.port(), policy = %config.post_win_policy(), "Starting tic-tac-toe server");
            decoupled_tictactoe::serve(&config).await
        }
        Command::Config(args) => {
            let config = resolve_config(args)?;
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

fn resolve_config(args: ServerArgs) -> Result<ServerConfig> {
    let config = ServerConfig::load(args.config.as_deref())?
        .with_overrides(args.host, args.port, args.post_win_policy);
    Ok(config)
}
