use std::env;

use anyhow::{Context, Ok, Result};

use super::super::args::ExportCommand;
use super::{CommandResult, CommandSummary};
use crate::config::load_config;
use crate::exporter;

pub fn export(cmd: ExportCommand) -> Result<CommandResult> {
    let args = &cmd.args;

    let cwd = env::current_dir().context("Failed to resolve current directory")?;
    let mut config = load_config(&cwd)?.config;

    // CLI flags override the config file
    if let Some(root) = &args.source_root {
        config.source_root = root.to_string_lossy().into_owned();
    }
    if let Some(root) = &args.output_root {
        config.output_root = root.to_string_lossy().into_owned();
    }
    if let Some(name) = &args.umbrella {
        config.umbrella_file = name.clone();
    }
    if let Some(kind) = args.strategy {
        config.strategy = kind;
    }
    if args.clean {
        config.clean_output = true;
    }
    config.validate()?;

    let summary = exporter::export(&config, args.verbose)?;

    Ok(CommandResult {
        summary: CommandSummary::Export(summary),
    })
}
