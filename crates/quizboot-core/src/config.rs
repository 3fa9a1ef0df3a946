//! Launcher configuration.
//!
//! Every field has a built-in default, so a launch without any config file
//! issues exactly `pip install openpyxl plotly streamlit watchdog pandas`
//! followed by `streamlit run quiz_app.py`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// File name looked up in the current directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "quizboot.toml";

/// Packages the quiz app needs, in install order.
pub const DEFAULT_PACKAGES: [&str; 5] = ["openpyxl", "plotly", "streamlit", "watchdog", "pandas"];

/// Entry-point file handed to the runner.
pub const DEFAULT_ENTRY_POINT: &str = "quiz_app.py";

/// Top-level quizboot configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LauncherConfig {
    #[serde(default)]
    pub installer: InstallerConfig,
    #[serde(default)]
    pub runner: RunnerConfig,
}

/// The package-installation command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallerConfig {
    #[serde(default = "default_installer_program")]
    pub program: String,
    /// Arguments placed before the package list.
    #[serde(default = "default_installer_args")]
    pub args: Vec<String>,
    #[serde(default = "default_packages")]
    pub packages: Vec<String>,
}

/// The application-runner command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    #[serde(default = "default_runner_program")]
    pub program: String,
    /// Arguments placed before the entry point.
    #[serde(default = "default_runner_args")]
    pub args: Vec<String>,
    #[serde(default = "default_entry_point")]
    pub entry_point: String,
}

fn default_installer_program() -> String {
    "pip".to_string()
}
fn default_installer_args() -> Vec<String> {
    vec!["install".to_string()]
}
fn default_packages() -> Vec<String> {
    DEFAULT_PACKAGES.iter().map(|p| p.to_string()).collect()
}
fn default_runner_program() -> String {
    "streamlit".to_string()
}
fn default_runner_args() -> Vec<String> {
    vec!["run".to_string()]
}
fn default_entry_point() -> String {
    DEFAULT_ENTRY_POINT.to_string()
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            program: default_installer_program(),
            args: default_installer_args(),
            packages: default_packages(),
        }
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            program: default_runner_program(),
            args: default_runner_args(),
            entry_point: default_entry_point(),
        }
    }
}

impl LauncherConfig {
    /// Parse a config from TOML text and validate it.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("invalid TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs that cannot form a command line at all.
    ///
    /// Whether the programs exist or the entry point is present is left to
    /// the launch itself.
    pub fn validate(&self) -> Result<()> {
        if self.installer.program.trim().is_empty() {
            anyhow::bail!("installer.program must not be empty");
        }
        if self.runner.program.trim().is_empty() {
            anyhow::bail!("runner.program must not be empty");
        }
        if self.runner.entry_point.trim().is_empty() {
            anyhow::bail!("runner.entry_point must not be empty");
        }
        Ok(())
    }

    /// Render the config as TOML, as written by `quizboot init`.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize config")
    }
}

/// Load config from an explicit path, or fall back to the default location.
///
/// The default location is `quizboot.toml` in the current directory; when it
/// is absent the built-in defaults apply. An explicit path that does not
/// exist is an error.
pub fn load_config_from(path: Option<&Path>) -> Result<LauncherConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from(CONFIG_FILE_NAME);
            local.exists().then_some(local)
        }
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = LauncherConfig::parse(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(config)
        }
        None => {
            tracing::debug!("no {CONFIG_FILE_NAME} found, using built-in defaults");
            Ok(LauncherConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_hold_the_five_packages_in_order() {
        let config = LauncherConfig::default();
        assert_eq!(config.installer.program, "pip");
        assert_eq!(config.installer.args, vec!["install"]);
        assert_eq!(
            config.installer.packages,
            vec!["openpyxl", "plotly", "streamlit", "watchdog", "pandas"]
        );
        assert_eq!(config.runner.program, "streamlit");
        assert_eq!(config.runner.args, vec!["run"]);
        assert_eq!(config.runner.entry_point, "quiz_app.py");
    }

    #[test]
    fn empty_document_is_the_default_config() {
        assert_eq!(LauncherConfig::parse("").unwrap(), LauncherConfig::default());
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let config = LauncherConfig::parse(
            r#"
[runner]
entry_point = "other_app.py"
"#,
        )
        .unwrap();
        assert_eq!(config.runner.entry_point, "other_app.py");
        assert_eq!(config.runner.program, "streamlit");
        assert_eq!(config.installer, InstallerConfig::default());
    }

    #[test]
    fn empty_package_list_is_allowed() {
        let config = LauncherConfig::parse("[installer]\npackages = []\n").unwrap();
        assert!(config.installer.packages.is_empty());
    }

    #[test]
    fn blank_program_is_rejected() {
        let err = LauncherConfig::parse("[installer]\nprogram = \"  \"\n").unwrap_err();
        assert!(err.to_string().contains("installer.program"));

        let err = LauncherConfig::parse("[runner]\nprogram = \"\"\n").unwrap_err();
        assert!(err.to_string().contains("runner.program"));
    }

    #[test]
    fn blank_entry_point_is_rejected() {
        let err = LauncherConfig::parse("[runner]\nentry_point = \"\"\n").unwrap_err();
        assert!(err.to_string().contains("runner.entry_point"));
    }

    #[test]
    fn invalid_toml_is_rejected() {
        let err = LauncherConfig::parse("[installer\n").unwrap_err();
        assert!(err.to_string().contains("invalid TOML"));
    }

    #[test]
    fn to_toml_parses_back_to_defaults() {
        let text = LauncherConfig::default().to_toml().unwrap();
        assert!(text.contains("[installer]"));
        assert!(text.contains("entry_point = \"quiz_app.py\""));
        assert_eq!(
            LauncherConfig::parse(&text).unwrap(),
            LauncherConfig::default()
        );
    }

    #[test]
    fn load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[installer]\nprogram = \"pip3\"\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.installer.program, "pip3");
    }

    #[test]
    fn load_missing_explicit_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn load_reports_path_on_parse_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "runner = 3\n").unwrap();

        let err = load_config_from(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("broken.toml"));
    }
}
