use clap::Subcommand;

use crate::cli::subcommands::{BuildingCommands, CommentCommands, TaskCommands, UserCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Users who create and work on tasks.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Buildings.
    Building {
        #[command(subcommand)]
        action: BuildingCommands,
    },
    /// Tasks.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Task comments.
    Comment {
        #[command(subcommand)]
        action: CommentCommands,
    },
}
