use std::process::ExitCode;

/// Exit status for the CLI.
///
/// Findings never change the exit status: an analysis that completes is a
/// success whether or not unused strings were found.
///
/// - `Success` (0): Command completed
/// - `Error` (2): Command failed (config error, missing application directory, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed.
    Success,
    /// Command failed due to an error.
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
