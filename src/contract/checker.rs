use super::profile::ContractProfile;
use super::report::ContractReport;
use super::requirement::{CheckResult, Requirement, RequirementKind};
use super::snapshot::EnvSnapshot;

/// How empty-but-bound values are treated by presence checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyValuePolicy {
    /// An empty string counts as present
    #[default]
    Allow,
    /// An empty string fails the presence check
    Reject,
}

/// Validates requirements against an injected environment snapshot.
///
/// Every check is a pure function of the snapshot and the requirement, so
/// checks can run any number of times in any order.
#[derive(Debug, Clone)]
pub struct ContractChecker {
    env: EnvSnapshot,
    empty_values: EmptyValuePolicy,
}

impl ContractChecker {
    pub fn new(env: EnvSnapshot) -> Self {
        Self {
            env,
            empty_values: EmptyValuePolicy::default(),
        }
    }

    /// Checker over the live process environment
    pub fn from_process() -> Self {
        Self::new(EnvSnapshot::from_process())
    }

    pub fn with_empty_values(mut self, policy: EmptyValuePolicy) -> Self {
        self.empty_values = policy;
        self
    }

    pub fn check_presence(&self, name: &str) -> CheckResult {
        match self.env.get(name) {
            None => CheckResult::fail(name, format!("{} must not be unset", name)),
            Some("") if self.empty_values == EmptyValuePolicy::Reject => {
                CheckResult::fail(name, format!("{} must not be empty", name))
            }
            Some(_) => CheckResult::pass(name),
        }
    }

    pub fn check_exact_value(&self, name: &str, expected: &str) -> CheckResult {
        match self.env.get(name) {
            None => CheckResult::fail(name, format!("{} unset", name)),
            Some(actual) if actual != expected => CheckResult::fail(
                name,
                format!("{} expected {}, got {}", name, expected, actual),
            ),
            Some(_) => CheckResult::pass(name),
        }
    }

    pub fn check(&self, requirement: &Requirement) -> CheckResult {
        let result = match &requirement.kind {
            RequirementKind::Presence => self.check_presence(&requirement.name),
            RequirementKind::ExactValue { expected } => {
                self.check_exact_value(&requirement.name, expected)
            }
        };

        match result.reason() {
            Some(reason) => tracing::warn!("Contract check failed: {}", reason),
            None => tracing::debug!("Contract check passed: {}", requirement.name),
        }

        result
    }

    /// Evaluate every requirement of the profile once, in declaration order
    pub fn run(&self, profile: &ContractProfile) -> ContractReport {
        let results = profile
            .requirements()
            .iter()
            .map(|req| self.check(req))
            .collect();

        // Nothing bound at all means we are outside the provisioning context
        let absent = profile.variable_names().all(|name| !self.env.contains(name));

        ContractReport::new(profile.name(), results, absent)
    }
}
