use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `wdn` binary.
#[derive(Debug, Parser)]
#[command(name = "wdn", version, about = "Warden - building task tracker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database path (overrides `database.path` from config)
    #[arg(long, global = true)]
    pub db: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            db: self.db.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, Commands, GlobalFlags, OutputFormat};
    use crate::cli::subcommands::{BuildingCommands, TaskCommands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "wdn", "--format", "table", "--verbose", "building", "list",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Building {
                action: BuildingCommands::List { limit: None }
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["wdn", "building", "get", "3", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Building {
                action: BuildingCommands::Get { id: 3 }
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["wdn", "--format", "xml", "user", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn task_list_accepts_every_filter() {
        let cli = Cli::try_parse_from([
            "wdn",
            "task",
            "list",
            "--building",
            "2",
            "--created-from",
            "2025-10-01",
            "--created-to",
            "2025-10-31",
            "--assigned-to",
            "7",
            "--status",
            "completed",
            "--timezone",
            "Asia/Ho_Chi_Minh",
            "--limit",
            "5",
            "--offset",
            "10",
        ])
        .expect("cli should parse");

        let Commands::Task {
            action: TaskCommands::List(args),
        } = cli.command
        else {
            panic!("expected task list");
        };
        assert_eq!(args.building, Some(2));
        assert_eq!(args.created_from.as_deref(), Some("2025-10-01"));
        assert_eq!(args.created_to.as_deref(), Some("2025-10-31"));
        assert_eq!(args.assigned_to, Some(7));
        assert_eq!(args.status.as_deref(), Some("completed"));
        assert_eq!(args.timezone.as_deref(), Some("Asia/Ho_Chi_Minh"));
        assert_eq!(args.limit, Some(5));
        assert_eq!(args.offset, 10);
    }

    #[test]
    fn task_update_rejects_assign_with_unassign() {
        let parsed = Cli::try_parse_from([
            "wdn", "task", "update", "1", "--assign", "4", "--unassign",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["wdn", "--db", "/tmp/w.db", "user", "list"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.db.as_deref(), Some("/tmp/w.db"));
    }
}
