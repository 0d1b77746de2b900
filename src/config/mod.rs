use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub contract: ContractConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub enable_cors: bool,
    pub enable_request_logging: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContractConfig {
    /// YAML profile to check; the built-in development profile when unset
    pub file: Option<PathBuf>,
    /// Treat empty-but-set variables as missing
    pub reject_empty: bool,
}

impl Environment {
    pub fn from_app_env(value: Option<&str>) -> Self {
        match value {
            Some("production") | Some("prod") => Environment::Production,
            Some("staging") | Some("stage") => Environment::Staging,
            _ => Environment::Development,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = Environment::from_app_env(env::var("APP_ENV").ok().as_deref());

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Allow tests or deployments to override port via env
        if let Some(port) = port_override(env::var("DOCKAUTO_PORT").ok(), env::var("PORT").ok()) {
            self.server.port = port;
        }
        if let Ok(v) = env::var("SERVER_ENABLE_CORS") {
            self.server.enable_cors = v.parse().unwrap_or(self.server.enable_cors);
        }
        if let Ok(v) = env::var("SERVER_ENABLE_REQUEST_LOGGING") {
            self.server.enable_request_logging = v.parse().unwrap_or(self.server.enable_request_logging);
        }

        // Contract overrides
        if let Ok(v) = env::var("CONTRACT_FILE") {
            if !v.is_empty() {
                self.contract.file = Some(PathBuf::from(v));
            }
        }
        if let Ok(v) = env::var("CONTRACT_REJECT_EMPTY") {
            self.contract.reject_empty = v.parse().unwrap_or(self.contract.reject_empty);
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig {
                port: 8080,
                enable_cors: true,
                enable_request_logging: true,
            },
            contract: ContractConfig::default(),
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            server: ServerConfig {
                port: 8080,
                enable_cors: true,
                enable_request_logging: true,
            },
            contract: ContractConfig::default(),
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig {
                port: 8080,
                enable_cors: false,
                enable_request_logging: false,
            },
            contract: ContractConfig::default(),
        }
    }
}

/// DOCKAUTO_PORT wins over PORT; unparsable values are ignored
fn port_override(dockauto_port: Option<String>, port: Option<String>) -> Option<u16> {
    dockauto_port
        .and_then(|s| s.parse::<u16>().ok())
        .or_else(|| port.and_then(|s| s.parse::<u16>().ok()))
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_app_env() {
        assert_eq!(Environment::from_app_env(Some("prod")), Environment::Production);
        assert_eq!(Environment::from_app_env(Some("staging")), Environment::Staging);
        assert_eq!(Environment::from_app_env(Some("development")), Environment::Development);
        assert_eq!(Environment::from_app_env(None), Environment::Development);
    }

    #[test]
    fn test_port_override_precedence() {
        let some = |s: &str| Some(s.to_string());
        assert_eq!(port_override(some("9000"), some("9100")), Some(9000));
        assert_eq!(port_override(None, some("9100")), Some(9100));
        assert_eq!(port_override(some("not-a-port"), some("9100")), Some(9100));
        assert_eq!(port_override(None, None), None);
    }

    #[test]
    fn test_default_development_config() {
        let config = AppConfig::development();
        assert_eq!(config.server.port, 8080);
        assert!(config.server.enable_cors);
        assert!(config.contract.file.is_none());
        assert!(!config.contract.reject_empty);
    }

    #[test]
    fn test_default_production_config() {
        let config = AppConfig::production();
        assert!(!config.server.enable_cors);
        assert!(!config.server.enable_request_logging);
        assert!(!config.contract.reject_empty);
    }
}
