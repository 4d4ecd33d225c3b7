//! Command-line interface for decoupled_tictactoe.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_model::PostWinPolicy;

/// Tic-tac-toe game server with a JSON REST interface
#[derive(Parser, Debug)]
#[command(name = "decoupled_tictactoe")]
#[command(about = "Serve a single game of tic-tac-toe over HTTP", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve(ServerArgs),

    /// Print the effective configuration as TOML
    Config(ServerArgs),
}

/// Settings shared by every command that resolves a configuration.
#[derive(Args, Debug, Clone)]
pub struct ServerArgs {
    /// Path to a TOML config file (defaults to tictactoe.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Accept ("continue") or refuse ("reject") moves after a win
    #[arg(long)]
    pub post_win_policy: Option<PostWinPolicy>,
}
