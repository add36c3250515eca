//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// toga-setup - Prepare a TOGA checkout for its first run.
#[derive(Debug, Parser)]
#[command(name = "toga-setup")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// TOGA root directory holding requirements.txt, models/ and modules/
    /// (defaults to the current directory)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Echo every command before running it
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only show errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run every setup stage (default if no command specified)
    Run(RunArgs),

    /// Show which stages are already satisfied
    Status,
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    /// Print the commands that would run without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Fail the run when any stage fails, not only the Python install
    #[arg(long)]
    pub strict: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_means_default_run() {
        let cli = Cli::parse_from(["toga-setup"]);
        assert!(cli.command.is_none());
        assert!(cli.root.is_none());
    }

    #[test]
    fn run_accepts_flags() {
        let cli = Cli::parse_from(["toga-setup", "run", "--dry-run", "--strict"]);
        match cli.command {
            Some(Commands::Run(args)) => {
                assert!(args.dry_run);
                assert!(args.strict);
            }
            other => panic!("Expected Run command, got {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["toga-setup", "status", "--root", "/opt/toga", "-q"]);
        assert!(matches!(cli.command, Some(Commands::Status)));
        assert_eq!(cli.root, Some(PathBuf::from("/opt/toga")));
        assert!(cli.quiet);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["toga-setup", "--force"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
