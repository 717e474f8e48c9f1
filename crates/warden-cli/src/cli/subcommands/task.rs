use clap::{Args, Subcommand};

/// Task entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// Create a task in a building.
    Create {
        #[arg(long)]
        building: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// Creating user ID.
        #[arg(long)]
        created_by: Option<i64>,
        /// Assignee user ID.
        #[arg(long)]
        assigned_to: Option<i64>,
        /// Open, "In Progress", Completed, or Rejected (any case).
        #[arg(long)]
        status: Option<String>,
        /// RFC 3339 instant, or a YYYY-MM-DD date meaning its local midnight.
        #[arg(long)]
        due: Option<String>,
    },
    /// Get a task with its comments.
    Get { id: i64 },
    /// Update a task.
    Update {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long, conflicts_with = "unassign")]
        assign: Option<i64>,
        #[arg(long)]
        unassign: bool,
        #[arg(long, conflicts_with = "clear_due")]
        due: Option<String>,
        #[arg(long)]
        clear_due: bool,
    },
    /// Delete a task and its comments.
    Delete { id: i64 },
    /// List tasks, newest first, narrowed by any combination of filters.
    List(TaskListArgs),
}

#[derive(Clone, Debug, Default, Args)]
pub struct TaskListArgs {
    /// Only tasks of this building.
    #[arg(long)]
    pub building: Option<i64>,
    /// Created on or after this local date (YYYY-MM-DD).
    #[arg(long)]
    pub created_from: Option<String>,
    /// Created on or before this local date (YYYY-MM-DD).
    #[arg(long)]
    pub created_to: Option<String>,
    /// Assignee user ID.
    #[arg(long)]
    pub assigned_to: Option<i64>,
    /// Status, matched case-insensitively.
    #[arg(long)]
    pub status: Option<String>,
    /// IANA zone the dates are read in. Defaults to `general.default_timezone`.
    #[arg(long)]
    pub timezone: Option<String>,
    #[arg(long)]
    pub limit: Option<u32>,
    #[arg(long, default_value_t = 0)]
    pub offset: u32,
}
