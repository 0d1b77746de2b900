// Contract and HTTP API error types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};
use thiserror::Error;

/// Errors raised while loading or evaluating an environment contract
#[derive(Debug, Error)]
pub enum ContractError {
    /// A single requirement was not met; `reason` is shown to the operator verbatim
    #[error("{reason}")]
    Violation { name: String, reason: String },

    /// None of the profile's variables are bound (not running under the provisioner)
    #[error("contract '{profile}' is absent: none of {} are set", .names.join(", "))]
    Absent { profile: String, names: Vec<String> },

    #[error("requirement '{0}' is declared more than once")]
    DuplicateRequirement(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid contract profile: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid dotenv file: {0}")]
    Dotenv(#[from] dotenvy::Error),
}

impl ContractError {
    pub fn violation(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ContractError::Violation {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// HTTP API error with status code and client-friendly message
#[derive(Debug)]
pub enum ApiError {
    // 404 Not Found
    NotFound(String),

    // 500 Internal Server Error
    InternalServerError(String),

    // 503 Service Unavailable
    ServiceUnavailable(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::NotFound(msg) => msg,
            ApiError::InternalServerError(msg) => msg,
            ApiError::ServiceUnavailable(msg) => msg,
        }
    }

    /// Error code for client handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
            ApiError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "success": false,
            "error": self.message(),
            "code": self.error_code()
        })
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        ApiError::ServiceUnavailable(message.into())
    }
}

impl From<ContractError> for ApiError {
    fn from(err: ContractError) -> Self {
        match err {
            ContractError::Violation { .. } | ContractError::Absent { .. } => {
                ApiError::service_unavailable(err.to_string())
            }
            other => {
                // Profile loading problems are operator errors, keep details in the log
                tracing::error!("Contract profile error: {}", other);
                ApiError::internal_server_error("Environment contract could not be loaded")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}
