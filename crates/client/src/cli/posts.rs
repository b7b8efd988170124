//! Post CLI commands.

use clap::{Parser, Subcommand};

/// Sauna visit post commands.
#[derive(Debug, Parser)]
pub struct PostsCommand {
    #[command(subcommand)]
    pub action: PostsAction,
}

/// Available post actions.
#[derive(Debug, Subcommand)]
pub enum PostsAction {
    /// List posts.
    List {
        /// Only posts about this sauna.
        #[arg(long)]
        sauna_id: Option<String>,
        /// Only posts by this user.
        #[arg(long)]
        user_id: Option<String>,
    },
    /// Create a post.
    Create {
        #[arg(long)]
        user_id: String,
        /// Place ID of the sauna.
        #[arg(long)]
        sauna_id: String,
        /// Post body.
        #[arg(long)]
        content: Option<String>,
    },
    /// Delete a post by ID.
    Delete {
        /// Post ID.
        id: i64,
    },
}
