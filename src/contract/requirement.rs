use serde::{Deserialize, Serialize};

/// What a requirement demands of a variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RequirementKind {
    /// Any bound value is accepted
    Presence,
    /// The value must equal `expected` exactly (case-sensitive, untrimmed)
    ExactValue { expected: String },
}

/// A single environment variable the provisioner must supply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub name: String,
    #[serde(flatten)]
    pub kind: RequirementKind,
}

impl Requirement {
    pub fn presence(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: RequirementKind::Presence,
        }
    }

    pub fn exact_value(name: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: RequirementKind::ExactValue {
                expected: expected.into(),
            },
        }
    }
}

/// Result of evaluating one requirement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum Outcome {
    Pass,
    Fail(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub name: String,
    pub outcome: Outcome,
}

impl CheckResult {
    pub fn pass(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outcome: Outcome::Pass,
        }
    }

    pub fn fail(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outcome: Outcome::Fail(reason.into()),
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self.outcome, Outcome::Pass)
    }

    pub fn reason(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Pass => None,
            Outcome::Fail(reason) => Some(reason),
        }
    }

    /// Convert into a `Result` so callers can propagate violations with `?`
    pub fn into_result(self) -> Result<(), crate::error::ContractError> {
        match self.outcome {
            Outcome::Pass => Ok(()),
            Outcome::Fail(reason) => Err(crate::error::ContractError::violation(self.name, reason)),
        }
    }
}
