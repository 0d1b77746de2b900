use std::path::PathBuf;

use clap::Args;

use crate::cli::{utils, OutputFormat};
use crate::config::ContractConfig;
use crate::contract::{self, EnvSnapshot};

#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    #[arg(long, help = "Contract profile YAML (defaults to CONTRACT_FILE or the built-in development profile)")]
    pub profile: Option<PathBuf>,

    #[arg(long, help = "Check variables from a dotenv file instead of the process environment")]
    pub env_file: Option<PathBuf>,

    #[arg(long, help = "Fail presence checks for variables that are set but empty")]
    pub reject_empty: bool,
}

impl CheckArgs {
    fn contract_config(&self, base: &ContractConfig) -> ContractConfig {
        ContractConfig {
            file: self.profile.clone().or_else(|| base.file.clone()),
            reject_empty: self.reject_empty || base.reject_empty,
        }
    }
}

/// Run the contract and return the exit code for its status
pub fn handle(args: CheckArgs, output_format: OutputFormat) -> anyhow::Result<i32> {
    let config = args.contract_config(&crate::config::config().contract);
    let env = match &args.env_file {
        Some(path) => EnvSnapshot::from_dotenv(path)?,
        None => EnvSnapshot::from_process(),
    };

    let code = evaluate(&config, env, &output_format)?;
    Ok(code)
}

pub(crate) fn evaluate(
    config: &ContractConfig,
    env: EnvSnapshot,
    output_format: &OutputFormat,
) -> anyhow::Result<i32> {
    let profile = contract::load_profile(config)?;
    let report = contract::checker_for(config, env).run(&profile);

    tracing::info!(
        "Contract '{}' evaluated: {} ({} checks)",
        report.profile(),
        report.status(),
        report.results().len()
    );

    utils::output_report(output_format, &report)?;
    Ok(report.status().exit_code())
}
