//! The `quizboot plan` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizboot_core::config::load_config_from;
use quizboot_core::model::LaunchPlan;

pub fn execute(config_path: Option<PathBuf>, json: bool) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let plan = LaunchPlan::from_config(&config);

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Step", "Command"]);
    table.add_row(vec![Cell::new("1. provision"), Cell::new(&plan.provision)]);
    table.add_row(vec![Cell::new("2. launch"), Cell::new(&plan.launch)]);
    println!("{table}");

    Ok(())
}
