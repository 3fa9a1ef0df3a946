//! quizboot CLI: install the quiz app's packages, then hand off to its runner.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "quizboot",
    version,
    about = "Install the quiz app's packages, then launch it with its runner"
)]
struct Cli {
    /// Config file path (default: ./quizboot.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Install packages, then run the app (the default)
    Launch,

    /// Print the commands a launch would issue, without running them
    Plan {
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a starter quizboot.toml holding the defaults
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("quizboot=warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Launch) {
        Commands::Launch => commands::launch::execute(cli.config).await,
        Commands::Plan { json } => commands::plan::execute(cli.config, json).map(|()| 0),
        Commands::Init => commands::init::execute().map(|()| 0),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}
