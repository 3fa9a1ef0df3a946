//! The launcher sequence.
//!
//! Provision, then launch. The provisioning result is recorded and logged but
//! not checked: the runner is started however the installer exited. The one
//! exception is an installer stopped by an interrupt, which ends the launch
//! the way it ends a shell script.

use std::sync::Arc;
use std::time::Instant;

use crate::error::LaunchError;
use crate::model::{CommandSpec, LaunchPlan};
use crate::outcome::{ExitOutcome, LaunchReport, StepOutcome};
use crate::traits::CommandExecutor;

/// Issues the two commands of a [`LaunchPlan`] in order.
pub struct Launcher {
    executor: Arc<dyn CommandExecutor>,
}

impl Launcher {
    pub fn new(executor: Arc<dyn CommandExecutor>) -> Self {
        Self { executor }
    }

    /// Run the full launch: provision, then hand off to the runner.
    ///
    /// Returns once the runner exits. Only a failure to observe the runner
    /// itself is an error.
    pub async fn run(&self, plan: &LaunchPlan) -> Result<LaunchReport, LaunchError> {
        let provision = self.provision(&plan.provision).await;
        if provision.outcome.is_interrupt() {
            tracing::info!(
                status = provision.outcome.code(),
                "installer {}; not launching",
                provision.outcome
            );
            return Ok(LaunchReport {
                provision,
                launch: None,
            });
        }

        let launch = self.launch(&plan.launch).await?;
        Ok(LaunchReport {
            provision,
            launch: Some(launch),
        })
    }

    /// Issue the installation request. Never fails.
    pub async fn provision(&self, command: &CommandSpec) -> StepOutcome {
        tracing::debug!(command = %command, "provisioning dependencies");
        let start = Instant::now();

        let outcome = match self.executor.execute(command).await {
            Ok(outcome) => outcome,
            Err(e) => ExitOutcome::Lost {
                reason: e.to_string(),
            },
        };
        let elapsed = start.elapsed();

        if outcome.success() {
            tracing::debug!(?elapsed, "provisioning finished");
        } else if !outcome.is_interrupt() {
            tracing::info!(
                program = %command.program,
                status = outcome.code(),
                "installer {outcome}; continuing"
            );
        }

        StepOutcome {
            command: command.clone(),
            outcome,
            elapsed,
        }
    }

    /// Start the runner and wait for it to exit.
    pub async fn launch(&self, command: &CommandSpec) -> Result<StepOutcome, LaunchError> {
        tracing::debug!(command = %command, "launching application");
        let start = Instant::now();

        let outcome = self.executor.execute(command).await?;
        let elapsed = start.elapsed();

        tracing::debug!(
            status = outcome.code(),
            ?elapsed,
            "runner {outcome}"
        );

        Ok(StepOutcome {
            command: command.clone(),
            outcome,
            elapsed,
        })
    }
}
