use std::collections::BTreeMap;
use std::path::Path;

use crate::error::ContractError;

/// Immutable view of environment variables, captured once and handed to the checker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    ///
    /// Values that are not valid UTF-8 still count as bound; they are
    /// converted lossily so a mismatch message can show them.
    pub fn from_process() -> Self {
        let vars = std::env::vars_os()
            .map(|(k, v)| {
                (
                    k.to_string_lossy().into_owned(),
                    v.to_string_lossy().into_owned(),
                )
            })
            .collect();
        Self { vars }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Parse a dotenv file without touching the process environment
    pub fn from_dotenv(path: impl AsRef<Path>) -> Result<Self, ContractError> {
        let path = path.as_ref();
        let io_error = |err: dotenvy::Error| match err {
            dotenvy::Error::Io(source) => ContractError::Io {
                path: path.display().to_string(),
                source,
            },
            other => ContractError::Dotenv(other),
        };

        let mut vars = BTreeMap::new();
        for item in dotenvy::from_path_iter(path).map_err(io_error)? {
            let (key, value) = item?;
            vars.insert(key, value);
        }
        tracing::debug!("Loaded {} variables from {}", vars.len(), path.display());
        Ok(Self { vars })
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
