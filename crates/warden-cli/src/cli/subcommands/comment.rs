use clap::Subcommand;

/// Task comment commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CommentCommands {
    /// Comment on a task.
    Add {
        task_id: i64,
        #[arg(long)]
        body: String,
        /// Authoring user ID.
        #[arg(long)]
        user: Option<i64>,
    },
    /// List comments on a task, oldest first.
    List { task_id: i64 },
    /// Delete a comment.
    Delete { id: i64 },
}
