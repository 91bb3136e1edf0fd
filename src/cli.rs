use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::commands::Mode;

/// FolderForge - scaffold folder trees and draw them as text diagrams
#[derive(Parser, Debug)]
#[command(name = "folderforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Root directory to work in (defaults to the current directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colors
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Mode to run; prompted for when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactively create nested folders and diagram them
    Create,

    /// Draw the tree diagram of an existing directory
    Read,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl Command {
    /// Interactive mode selected by this subcommand, if any.
    pub fn mode(&self) -> Option<Mode> {
        match self {
            Command::Create => Some(Mode::Create),
            Command::Read => Some(Mode::Read),
            Command::Completions(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        // Validates the CLI definition is correct
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_without_subcommand() {
        let cli = Cli::parse_from(["folderforge"]);
        assert!(cli.command.is_none());
        assert!(cli.directory.is_none());
    }

    #[test]
    fn parse_read_with_directory() {
        let cli = Cli::parse_from(["folderforge", "read", "-C", "/projects/app"]);
        match cli.command {
            Some(Command::Read) => {
                assert_eq!(cli.directory, Some(PathBuf::from("/projects/app")));
            }
            _ => panic!("Expected Read command"),
        }
    }

    #[test]
    fn parse_completions() {
        let cli = Cli::parse_from(["folderforge", "completions", "bash"]);
        match cli.command {
            Some(Command::Completions(args)) => assert_eq!(args.shell, Shell::Bash),
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn command_modes() {
        assert_eq!(Command::Create.mode(), Some(Mode::Create));
        assert_eq!(Command::Read.mode(), Some(Mode::Read));
    }

    #[test]
    fn global_flags() {
        let cli = Cli::parse_from(["folderforge", "-vvv", "--no-color", "create"]);
        assert_eq!(cli.verbose, 3);
        assert!(cli.no_color);
        assert!(matches!(cli.command, Some(Command::Create)));
    }
}
