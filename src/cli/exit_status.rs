use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): every artifact was written
/// - `Error` (2): the run aborted (bad input, unsupported format, parse error, I/O error)
///
/// Usage errors are reported by clap, which also exits with 2.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Run completed and all artifacts were written.
    Success,
    /// Run aborted before completing.
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
