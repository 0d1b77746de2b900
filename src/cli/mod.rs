pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "dockauto")]
#[command(about = "Dockauto demo CLI - greeting and provisioned environment contract checks")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Verify the environment contract (exit 0 satisfied, 1 violated, 2 absent)")]
    Check(commands::check::CheckArgs),

    #[command(about = "Print the greeting")]
    Greet,

    #[command(about = "Contract profile inspection")]
    Profile {
        #[command(subcommand)]
        cmd: commands::profile::ProfileCommands,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Run a CLI command and return the process exit code
pub async fn run(cli: Cli) -> anyhow::Result<i32> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Check(args) => commands::check::handle(args, output_format),
        Commands::Greet => commands::greet::handle(output_format).map(|_| 0),
        Commands::Profile { cmd } => commands::profile::handle(cmd, output_format).map(|_| 0),
    }
}
