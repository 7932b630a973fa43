use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): the command ran and everything asked for was found
/// - `Failure` (1): the command ran but a path or file was not there
/// - `Error` (2): config, document or I/O errors
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    /// Nothing found for the request.
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
