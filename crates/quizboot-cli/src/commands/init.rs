//! The `quizboot init` command.

use std::path::Path;

use anyhow::{Context, Result};

use quizboot_core::config::{LauncherConfig, CONFIG_FILE_NAME};

pub fn execute() -> Result<()> {
    if Path::new(CONFIG_FILE_NAME).exists() {
        println!("{CONFIG_FILE_NAME} already exists, skipping.");
        return Ok(());
    }

    let body = LauncherConfig::default().to_toml()?;
    std::fs::write(CONFIG_FILE_NAME, format!("{HEADER}{body}"))
        .with_context(|| format!("failed to write {CONFIG_FILE_NAME}"))?;
    println!("Created {CONFIG_FILE_NAME}");

    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE_NAME} if the quiz app needs other packages");
    println!("  2. Run: quizboot plan");
    println!("  3. Run: quizboot");

    Ok(())
}

const HEADER: &str = "# quizboot configuration
#
# `installer` runs once with every package as arguments; `runner` runs next
# with the entry point as its last argument.

";
