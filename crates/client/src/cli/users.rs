//! User CLI commands.

use clap::{Parser, Subcommand};

/// User management commands.
#[derive(Debug, Parser)]
pub struct UsersCommand {
    #[command(subcommand)]
    pub action: UsersAction,
}

/// Available user actions.
#[derive(Debug, Subcommand)]
pub enum UsersAction {
    /// List all users.
    List,
    /// Create a user, or overwrite the one with the same ID.
    Create {
        /// User ID (usually issued by the identity provider).
        #[arg(long)]
        id: String,
        /// User email.
        #[arg(long)]
        email: String,
        /// Display name.
        #[arg(long)]
        name: Option<String>,
    },
    /// Get user by ID.
    Get {
        /// User ID.
        id: String,
    },
}
