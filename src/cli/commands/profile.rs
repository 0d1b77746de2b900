use std::path::PathBuf;

use clap::Subcommand;

use crate::cli::OutputFormat;
use crate::config::ContractConfig;
use crate::contract;

#[derive(Subcommand)]
pub enum ProfileCommands {
    #[command(about = "Show the requirements of the active contract profile")]
    Show {
        #[arg(long, help = "Contract profile YAML (defaults to CONTRACT_FILE or the built-in development profile)")]
        profile: Option<PathBuf>,
    },
}

pub fn handle(cmd: ProfileCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        ProfileCommands::Show { profile } => {
            let base = &crate::config::config().contract;
            let config = ContractConfig {
                file: profile.or_else(|| base.file.clone()),
                reject_empty: base.reject_empty,
            };
            let profile = contract::load_profile(&config)?;

            match output_format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&profile)?),
                OutputFormat::Text => print!("{}", profile.to_yaml()?),
            }
            Ok(())
        }
    }
}
