use crate::exporter::ExportSummary;

#[derive(Debug)]
pub enum CommandSummary {
    Export(ExportSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a hexport command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}
