//! quizboot-runner: Child-process execution for launch steps.
//!
//! [`ProcessExecutor`] runs each command as a real child process with the
//! launcher's stdio, the way a shell script would. [`mock::RecordingExecutor`]
//! stands in for it in tests.

pub mod mock;
pub mod process;

pub use process::ProcessExecutor;
