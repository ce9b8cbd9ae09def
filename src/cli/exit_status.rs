use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): Report printed.
/// - `Error` (2): Run failed (unreadable file, bad regex, config error);
///   no partial report is emitted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
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
