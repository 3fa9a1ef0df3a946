//! How each launch step ended.

use std::fmt;
use std::time::Duration;

use crate::model::CommandSpec;

/// Exit status reported when a program cannot be found.
pub const EXIT_NOT_FOUND: i32 = 127;
/// Exit status reported when a program exists but cannot be executed.
pub const EXIT_NOT_EXECUTABLE: i32 = 126;
/// Added to the signal number when a child is killed by a signal.
const SIGNAL_EXIT_BASE: i32 = 128;
/// Terminal interrupt (Ctrl-C).
pub const SIGINT: i32 = 2;
/// Polite termination request.
pub const SIGTERM: i32 = 15;

/// The way a single command ended, in shell terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitOutcome {
    /// The program ran and exited with this code.
    Exited { code: i32 },
    /// The program was terminated by a signal.
    Signaled { signal: i32 },
    /// The program could not be started.
    NotStarted { code: i32, reason: String },
    /// The program started but its status could not be collected.
    Lost { reason: String },
}

impl ExitOutcome {
    /// The status a POSIX shell would report for this outcome.
    pub fn code(&self) -> i32 {
        match self {
            ExitOutcome::Exited { code } | ExitOutcome::NotStarted { code, .. } => *code,
            ExitOutcome::Signaled { signal } => SIGNAL_EXIT_BASE + signal,
            ExitOutcome::Lost { .. } => 1,
        }
    }

    pub fn success(&self) -> bool {
        self.code() == 0
    }

    /// Whether the child was stopped by an interrupt or termination request.
    ///
    /// A shell running the launch steps stops here instead of moving on.
    pub fn is_interrupt(&self) -> bool {
        matches!(
            self,
            ExitOutcome::Signaled { signal } if *signal == SIGINT || *signal == SIGTERM
        )
    }
}

impl fmt::Display for ExitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitOutcome::Exited { code } => write!(f, "exited with status {code}"),
            ExitOutcome::Signaled { signal } => write!(f, "killed by signal {signal}"),
            ExitOutcome::NotStarted { code, reason } => {
                write!(f, "not started ({reason}), status {code}")
            }
            ExitOutcome::Lost { reason } => write!(f, "status lost: {reason}"),
        }
    }
}

/// One issued command and how it ended.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub command: CommandSpec,
    pub outcome: ExitOutcome,
    pub elapsed: Duration,
}

/// The steps of a finished launch.
#[derive(Debug, Clone)]
pub struct LaunchReport {
    pub provision: StepOutcome,
    /// `None` when provisioning was interrupted and the runner never started.
    pub launch: Option<StepOutcome>,
}

impl LaunchReport {
    /// The launcher's own exit status: whatever the last issued command returned.
    pub fn exit_code(&self) -> i32 {
        match &self.launch {
            Some(launch) => launch.outcome.code(),
            None => self.provision.outcome.code(),
        }
    }
}
