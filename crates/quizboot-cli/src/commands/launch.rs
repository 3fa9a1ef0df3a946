//! The `quizboot launch` command, also run when no subcommand is given.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use quizboot_core::config::load_config_from;
use quizboot_core::engine::Launcher;
use quizboot_core::model::LaunchPlan;
use quizboot_runner::ProcessExecutor;

/// Run the launch and return the status the process should exit with.
pub async fn execute(config_path: Option<PathBuf>) -> Result<i32> {
    let config = load_config_from(config_path.as_deref())?;
    let plan = LaunchPlan::from_config(&config);

    let launcher = Launcher::new(Arc::new(ProcessExecutor::new()));
    let report = launcher.run(&plan).await?;

    tracing::debug!(
        provision_status = report.provision.outcome.code(),
        launch_status = report.exit_code(),
        "launch finished"
    );

    Ok(report.exit_code())
}
