// contract/mod.rs - Environment contract verification
//
// The provisioner injects configuration (DB_HOST, REDIS_HOST, APP_ENV, ...)
// before the app or its tests start. A contract profile declares what must be
// there; the checker evaluates it against a snapshot of the environment.

pub mod checker;
pub mod profile;
pub mod report;
pub mod requirement;
pub mod snapshot;

pub use checker::{ContractChecker, EmptyValuePolicy};
pub use profile::{ContractProfile, DEVELOPMENT_PROFILE};
pub use report::{ContractReport, ContractStatus};
pub use requirement::{CheckResult, Outcome, Requirement, RequirementKind};
pub use snapshot::EnvSnapshot;

use crate::config::ContractConfig;
use crate::error::ContractError;

/// Load the profile selected by configuration, falling back to the built-in dev profile
pub fn load_profile(config: &ContractConfig) -> Result<ContractProfile, ContractError> {
    match &config.file {
        Some(path) => ContractProfile::from_file(path),
        None => Ok(ContractProfile::development()),
    }
}

/// Build a checker over `env` honoring the configured empty-value policy
pub fn checker_for(config: &ContractConfig, env: EnvSnapshot) -> ContractChecker {
    let policy = if config.reject_empty {
        EmptyValuePolicy::Reject
    } else {
        EmptyValuePolicy::Allow
    };
    ContractChecker::new(env).with_empty_values(policy)
}
