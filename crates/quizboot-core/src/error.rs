//! Launch error types.
//!
//! A command that exits non-zero, or that cannot be started, is not an error:
//! it is an [`ExitOutcome`](crate::outcome::ExitOutcome). These errors cover
//! the launcher losing track of a child it already started.

use thiserror::Error;

/// Errors that can occur while executing a launch step.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// Waiting on a started child process failed.
    #[error("failed to wait for `{program}`: {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
