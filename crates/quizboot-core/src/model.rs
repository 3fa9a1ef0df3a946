//! Core data model types for quizboot.
//!
//! A launch is nothing more than two command lines issued in a fixed order:
//! one that provisions packages and one that hands off to the app runner.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::LauncherConfig;

/// A single command line: a program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    /// Program name or path, resolved through `PATH` by the executor.
    pub program: String,
    /// Arguments in the order they are passed.
    #[serde(default)]
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for CommandSpec {
    /// Renders the command the way it would be typed into a POSIX shell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", shell_quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", shell_quote(arg))?;
        }
        Ok(())
    }
}

/// Quote a word for display only. Words made of safe characters are left bare.
fn shell_quote(word: &str) -> String {
    let safe = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:@+,%".contains(c));
    if safe {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}

/// The ordered pair of commands a launch issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchPlan {
    /// Installs every configured package in one request.
    pub provision: CommandSpec,
    /// Starts the app runner with the entry-point file as its last argument.
    pub launch: CommandSpec,
}

impl LaunchPlan {
    pub fn from_config(config: &LauncherConfig) -> Self {
        let provision = CommandSpec::new(&config.installer.program)
            .args(&config.installer.args)
            .args(&config.installer.packages);

        let launch = CommandSpec::new(&config.runner.program)
            .args(&config.runner.args)
            .arg(&config.runner.entry_point);

        Self { provision, launch }
    }
}

impl Default for LaunchPlan {
    fn default() -> Self {
        Self::from_config(&LauncherConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plan_matches_bootstrap_commands() {
        let plan = LaunchPlan::default();
        assert_eq!(
            plan.provision.to_string(),
            "pip install openpyxl plotly streamlit watchdog pandas"
        );
        assert_eq!(plan.launch.to_string(), "streamlit run quiz_app.py");
    }

    #[test]
    fn provision_covers_all_packages_in_one_command() {
        let plan = LaunchPlan::default();
        assert_eq!(plan.provision.program, "pip");
        assert_eq!(
            plan.provision.args,
            vec!["install", "openpyxl", "plotly", "streamlit", "watchdog", "pandas"]
        );
    }

    #[test]
    fn launch_takes_entry_point_as_single_trailing_argument() {
        let plan = LaunchPlan::default();
        assert_eq!(plan.launch.program, "streamlit");
        assert_eq!(plan.launch.args, vec!["run", "quiz_app.py"]);
    }

    #[test]
    fn plan_follows_custom_config() {
        let mut config = LauncherConfig::default();
        config.installer.program = "uv".into();
        config.installer.args = vec!["pip".into(), "install".into()];
        config.installer.packages = vec!["pandas".into()];
        config.runner.entry_point = "apps/other.py".into();

        let plan = LaunchPlan::from_config(&config);
        assert_eq!(plan.provision.to_string(), "uv pip install pandas");
        assert_eq!(plan.launch.to_string(), "streamlit run apps/other.py");
    }

    #[test]
    fn display_quotes_unsafe_words() {
        let cmd = CommandSpec::new("sh").args(["-c", "echo it's here", ""]);
        assert_eq!(cmd.to_string(), r"sh -c 'echo it'\''s here' ''");
    }

    #[test]
    fn plan_serializes_to_json() {
        let json = serde_json::to_value(LaunchPlan::default()).unwrap();
        assert_eq!(json["provision"]["program"], "pip");
        assert_eq!(json["launch"]["args"][1], "quiz_app.py");
    }
}
