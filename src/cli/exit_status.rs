use std::process::ExitCode;

use super::commands::CommandResult;

/// Process exit status.
///
/// - `Success` (0): no error-severity issue
/// - `Failure` (1): at least one error-severity issue
/// - `Error` (2): the command could not run (bad config, missing input, invalid JSON)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// Dry runs and generators set `exit_on_errors` to false and always succeed.
    pub fn from_result(result: &CommandResult) -> Self {
        if result.exit_on_errors && result.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::{CommandSummary, InitSummary, helper::finish};

    #[test]
    fn exit_code_values() {
        assert_eq!(ExitCode::from(ExitStatus::Success), ExitCode::from(0));
        assert_eq!(ExitCode::from(ExitStatus::Failure), ExitCode::from(1));
        assert_eq!(ExitCode::from(ExitStatus::Error), ExitCode::from(2));
    }

    #[test]
    fn dry_runs_never_fail() {
        let summary = CommandSummary::Init(InitSummary {
            path: ".i18nkitrc.json".to_string(),
            error: None,
        });
        let mut result = finish(summary, Vec::new(), 0, 0, false);
        result.error_count = 3;
        assert_eq!(ExitStatus::from_result(&result), ExitStatus::Success);
        result.exit_on_errors = true;
        assert_eq!(ExitStatus::from_result(&result), ExitStatus::Failure);
    }
}
