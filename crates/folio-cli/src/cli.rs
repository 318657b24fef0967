//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Publish Notion database pages as Hugo markdown posts
#[derive(Parser, Debug)]
#[command(name = "folio", version)]
#[command(about = "Publish Notion database pages as Hugo markdown posts", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true, env = "FOLIO_CONFIG")]
    pub config: Option<String>,

    /// Enable debug logging for folio crates
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run; defaults to `sync`
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch published posts and write them as markdown
    Sync(SyncArgs),

    /// Configuration management
    Config {
        /// Config action
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Options for `folio sync`.
#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncArgs {
    /// Render posts without writing any files
    #[arg(long)]
    pub dry_run: bool,

    /// Output directory, overriding the configured one
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Config subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,

    /// Write a starter config file
    Init {
        /// Where to write it, instead of the resolved path
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Args {
    /// The command to run, with `sync` as the default.
    pub fn resolved_command(&self) -> Command {
        match &self.command {
            Some(Command::Sync(args)) => Command::Sync(args.clone()),
            Some(Command::Config { action }) => Command::Config {
                action: action.clone(),
            },
            None => Command::Sync(SyncArgs::default()),
        }
    }
}
