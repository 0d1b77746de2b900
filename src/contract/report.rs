use serde::Serialize;

use super::requirement::CheckResult;
use crate::error::ContractError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    /// Every requirement passed
    Satisfied,
    /// The provisioner ran but at least one requirement failed
    Violated,
    /// None of the contract's variables are bound
    Absent,
}

impl ContractStatus {
    /// Process exit code used by `dockauto check`
    pub fn exit_code(&self) -> i32 {
        match self {
            ContractStatus::Satisfied => 0,
            ContractStatus::Violated => 1,
            ContractStatus::Absent => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContractStatus::Satisfied => "satisfied",
            ContractStatus::Violated => "violated",
            ContractStatus::Absent => "absent",
        }
    }
}

impl std::fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of running a whole profile
#[derive(Debug, Clone, Serialize)]
pub struct ContractReport {
    profile: String,
    status: ContractStatus,
    results: Vec<CheckResult>,
}

impl ContractReport {
    pub(crate) fn new(profile: &str, results: Vec<CheckResult>, absent: bool) -> Self {
        let status = if absent && !results.is_empty() {
            ContractStatus::Absent
        } else if results.iter().all(CheckResult::is_pass) {
            ContractStatus::Satisfied
        } else {
            ContractStatus::Violated
        };

        Self {
            profile: profile.to_string(),
            status,
            results,
        }
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn status(&self) -> ContractStatus {
        self.status
    }

    pub fn is_satisfied(&self) -> bool {
        self.status == ContractStatus::Satisfied
    }

    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| !r.is_pass())
    }

    /// Fail reasons in evaluation order, verbatim
    pub fn reasons(&self) -> Vec<&str> {
        self.failures().filter_map(CheckResult::reason).collect()
    }

    /// Collapse the report into the first error an operator should see
    pub fn into_result(self) -> Result<(), ContractError> {
        match self.status {
            ContractStatus::Satisfied => Ok(()),
            ContractStatus::Absent => Err(ContractError::Absent {
                names: self.results.into_iter().map(|r| r.name).collect(),
                profile: self.profile,
            }),
            ContractStatus::Violated => match self.results.into_iter().find(|r| !r.is_pass()) {
                Some(failed) => failed.into_result(),
                None => Ok(()),
            },
        }
    }
}
