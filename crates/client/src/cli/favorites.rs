//! Favorite CLI commands.

use clap::{Parser, Subcommand};

/// Favorite commands.
#[derive(Debug, Parser)]
pub struct FavoritesCommand {
    #[command(subcommand)]
    pub action: FavoritesAction,
}

/// Available favorite actions.
#[derive(Debug, Subcommand)]
pub enum FavoritesAction {
    /// Favorite a sauna.
    Add {
        #[arg(long)]
        user_id: String,
        #[arg(long)]
        sauna_id: String,
    },
    /// List favorites; with a user ID, list that user's favorite saunas.
    List {
        /// User ID.
        user_id: Option<String>,
    },
    /// Remove a favorite by user and sauna.
    Remove {
        #[arg(long)]
        user_id: String,
        #[arg(long)]
        sauna_id: String,
    },
    /// Remove a favorite by ID.
    RemoveById {
        /// Favorite ID.
        id: i64,
    },
}
