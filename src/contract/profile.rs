use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::requirement::Requirement;
use crate::error::ContractError;

pub const DEVELOPMENT_PROFILE: &str = "development";

/// A named set of requirements. Names are unique within a profile, so a run
/// produces exactly one result per variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractProfile {
    name: String,
    requirements: Vec<Requirement>,
}

#[derive(Deserialize)]
struct RawProfile {
    name: String,
    #[serde(default)]
    requirements: Vec<Requirement>,
}

impl ContractProfile {
    pub fn new(name: impl Into<String>, requirements: Vec<Requirement>) -> Result<Self, ContractError> {
        let mut seen = HashSet::new();
        for req in &requirements {
            if !seen.insert(req.name.as_str()) {
                return Err(ContractError::DuplicateRequirement(req.name.clone()));
            }
        }

        Ok(Self {
            name: name.into(),
            requirements,
        })
    }

    /// Variables injected by the provisioner for the dev profile
    pub fn development() -> Self {
        Self {
            name: DEVELOPMENT_PROFILE.to_string(),
            requirements: vec![
                Requirement::presence("DB_HOST"),
                Requirement::presence("REDIS_HOST"),
                Requirement::exact_value("APP_ENV", "development"),
            ],
        }
    }

    pub fn from_yaml(source: &str) -> Result<Self, ContractError> {
        let raw: RawProfile = serde_yaml::from_str(source)?;
        Self::new(raw.name, raw.requirements)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ContractError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ContractError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let profile = Self::from_yaml(&source)?;
        tracing::debug!(
            "Loaded contract profile '{}' ({} requirements) from {}",
            profile.name,
            profile.requirements.len(),
            path.display()
        );
        Ok(profile)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.requirements.iter().map(|r| r.name.as_str())
    }

    pub fn to_yaml(&self) -> Result<String, ContractError> {
        Ok(serde_yaml::to_string(self)?)
    }
}
