//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `export`: Run the header extraction over the configured source tree
//! - `init`: Initialize the hexport configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::strategy::StrategyKind;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Source tree scanned recursively for headers (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Destination for the exported tree and umbrella file (overrides config file)
    #[arg(long)]
    pub output_root: Option<PathBuf>,

    /// Umbrella header file name (overrides config file)
    #[arg(long)]
    pub umbrella: Option<String>,

    /// Extraction strategy (overrides config file)
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyKind>,

    /// Wipe the output directory before exporting
    #[arg(long)]
    pub clean: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExportCommand {
    #[command(flatten)]
    pub args: ExportArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Export the public API surface from a header tree
    Export(ExportCommand),
    /// Initialize a new .hexportrc.json configuration file
    Init,
}
