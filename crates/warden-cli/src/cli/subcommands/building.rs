use clap::Subcommand;

/// Building commands.
#[derive(Clone, Debug, Subcommand)]
pub enum BuildingCommands {
    /// Create a building.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        address: Option<String>,
    },
    /// List buildings.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a building by ID.
    Get { id: i64 },
    /// Update a building.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, conflicts_with = "clear_address")]
        address: Option<String>,
        /// Remove the stored address.
        #[arg(long)]
        clear_address: bool,
    },
    /// Delete a building with all of its tasks.
    Delete { id: i64 },
}
