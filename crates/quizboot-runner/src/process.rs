//! Real child processes for launch steps.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};

use async_trait::async_trait;
use tokio::process::{Child, Command};

use quizboot_core::error::LaunchError;
use quizboot_core::model::CommandSpec;
use quizboot_core::outcome::{ExitOutcome, EXIT_NOT_EXECUTABLE, EXIT_NOT_FOUND};
use quizboot_core::traits::CommandExecutor;

/// Runs commands as child processes that share the launcher's terminal.
///
/// No timeout is applied. While a child runs, Ctrl-C is left to the child
/// (it receives the interrupt through the foreground process group) and the
/// launcher keeps waiting for its status. A child that dies from the
/// interrupt is reported as [`ExitOutcome::Signaled`]; deciding to stop
/// there is up to the caller.
#[derive(Debug, Clone, Default)]
pub struct ProcessExecutor {
    working_dir: Option<PathBuf>,
}

impl ProcessExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every command from `dir` instead of the current directory.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    fn command(&self, spec: &CommandSpec) -> Command {
        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

#[async_trait]
impl CommandExecutor for ProcessExecutor {
    async fn execute(&self, spec: &CommandSpec) -> Result<ExitOutcome, LaunchError> {
        let mut child = match self.command(spec).spawn() {
            Ok(child) => child,
            Err(e) => return Ok(not_started(&spec.program, &e)),
        };

        let status = wait_absorbing_interrupts(&mut child, &spec.program)
            .await
            .map_err(|source| LaunchError::Wait {
                program: spec.program.clone(),
                source,
            })?;

        Ok(outcome_from_status(status))
    }
}

/// Report a spawn failure the way a shell does and map it to its status.
fn not_started(program: &str, err: &std::io::Error) -> ExitOutcome {
    let (code, reason) = match err.kind() {
        ErrorKind::NotFound => (EXIT_NOT_FOUND, "command not found".to_string()),
        ErrorKind::PermissionDenied => (EXIT_NOT_EXECUTABLE, "permission denied".to_string()),
        _ => (EXIT_NOT_EXECUTABLE, err.to_string()),
    };
    eprintln!("quizboot: {program}: {reason}");
    ExitOutcome::NotStarted { code, reason }
}

async fn wait_absorbing_interrupts(child: &mut Child, program: &str) -> std::io::Result<ExitStatus> {
    loop {
        tokio::select! {
            status = child.wait() => return status,
            interrupt = tokio::signal::ctrl_c() => match interrupt {
                Ok(()) => tracing::debug!(program, "interrupt received, waiting for child to exit"),
                Err(e) => {
                    tracing::debug!(error = %e, "cannot listen for interrupts");
                    return child.wait().await;
                }
            },
        }
    }
}

fn outcome_from_status(status: ExitStatus) -> ExitOutcome {
    if let Some(code) = status.code() {
        return ExitOutcome::Exited { code };
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return ExitOutcome::Signaled { signal };
        }
    }

    ExitOutcome::Lost {
        reason: format!("no exit code in {status}"),
    }
}
