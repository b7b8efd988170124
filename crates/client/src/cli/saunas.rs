//! Sauna CLI commands.

use clap::{Parser, Subcommand};

/// Sauna search commands.
#[derive(Debug, Parser)]
pub struct SaunasCommand {
    #[command(subcommand)]
    pub action: SaunasAction,
}

/// Available sauna actions.
#[derive(Debug, Subcommand)]
pub enum SaunasAction {
    /// Search saunas by prefecture and/or keyword.
    Search {
        #[arg(long)]
        prefecture: Option<String>,
        #[arg(long)]
        keyword: Option<String>,
    },
    /// Get details for a place.
    Get {
        /// Place ID.
        place_id: String,
    },
}
