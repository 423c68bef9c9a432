use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed, all output files written
/// - `Error` (2): Command failed due to an internal error (I/O error,
///   bad config); the run aborts with no partial cleanup
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command failed due to internal error (I/O error, config error, etc.).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
