//! CLI command definitions.

pub mod favorites;
pub mod health;
pub mod posts;
pub mod saunas;
pub mod users;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the saunalog API.
#[derive(Debug, Parser)]
#[command(name = "saunalog-client")]
#[command(about = "CLI client for the saunalog API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "SAUNALOG_URL", default_value = "http://localhost:8000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// User management.
    Users(users::UsersCommand),
    /// Sauna visit posts.
    Posts(posts::PostsCommand),
    /// Search and inspect saunas.
    Saunas(saunas::SaunasCommand),
    /// Favorite saunas.
    Favorites(favorites::FavoritesCommand),
    /// Server health checks.
    Health(health::HealthCommand),
}
