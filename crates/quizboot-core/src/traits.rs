//! The seam between the launcher sequence and process execution.

use async_trait::async_trait;

use crate::error::LaunchError;
use crate::model::CommandSpec;
use crate::outcome::ExitOutcome;

/// Runs one command to completion and reports how it ended.
///
/// Implemented by `quizboot-runner` for real child processes and by test
/// doubles that only record what they were asked to run.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Run `command` and wait for it to exit.
    ///
    /// A program that cannot be started yields `Ok(ExitOutcome::NotStarted)`,
    /// not an error.
    async fn execute(&self, command: &CommandSpec) -> Result<ExitOutcome, LaunchError>;
}
