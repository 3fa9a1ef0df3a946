//! Recording executor for testing the launcher without spawning processes.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use quizboot_core::error::LaunchError;
use quizboot_core::model::CommandSpec;
use quizboot_core::outcome::ExitOutcome;
use quizboot_core::traits::CommandExecutor;

/// An executor that records every command it is asked to run.
///
/// Outcomes are handed out in call order; once the queue is empty every
/// command "exits" with status 0.
#[derive(Default)]
pub struct RecordingExecutor {
    /// Outcomes still to be returned.
    outcomes: Mutex<VecDeque<ExitOutcome>>,
    /// Commands received, in order.
    calls: Mutex<Vec<CommandSpec>>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an executor that returns `outcomes` for the first calls.
    pub fn with_outcomes(outcomes: impl IntoIterator<Item = ExitOutcome>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Commands received so far.
    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CommandExecutor for RecordingExecutor {
    async fn execute(&self, command: &CommandSpec) -> Result<ExitOutcome, LaunchError> {
        self.calls.lock().unwrap().push(command.clone());
        Ok(self
            .outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(ExitOutcome::Exited { code: 0 }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn queued_outcomes_come_back_in_order_then_default_to_success() {
        let executor = RecordingExecutor::with_outcomes([
            ExitOutcome::Exited { code: 1 },
            ExitOutcome::Signaled { signal: 2 },
        ]);
        let cmd = CommandSpec::new("pip");

        assert_eq!(executor.execute(&cmd).await.unwrap(), ExitOutcome::Exited { code: 1 });
        assert_eq!(executor.execute(&cmd).await.unwrap(), ExitOutcome::Signaled { signal: 2 });
        assert_eq!(executor.execute(&cmd).await.unwrap(), ExitOutcome::Exited { code: 0 });
    }

    #[tokio::test]
    async fn records_every_command() {
        let executor = RecordingExecutor::new();
        executor.execute(&CommandSpec::new("pip").arg("install")).await.unwrap();
        executor.execute(&CommandSpec::new("streamlit")).await.unwrap();

        assert_eq!(executor.call_count(), 2);
        let calls = executor.calls();
        assert_eq!(calls[0].args, vec!["install"]);
        assert_eq!(calls[1].program, "streamlit");
    }
}
