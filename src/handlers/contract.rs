// handlers/contract.rs - GET /contract handler

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::contract::{self, ContractStatus, EnvSnapshot};
use crate::middleware::ApiResponse;
use crate::server::AppState;

/// Evaluate the configured contract against the current process environment.
///
/// 200 when satisfied, 503 with the full report otherwise.
pub async fn contract_report(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, crate::error::ApiError> {
    let profile = contract::load_profile(&state.contract)?;
    let report = contract::checker_for(&state.contract, EnvSnapshot::from_process()).run(&profile);

    let response = match report.status() {
        ContractStatus::Satisfied => ApiResponse::success(report),
        ContractStatus::Violated => {
            let error = report.reasons().join("; ");
            ApiResponse::failure(report, StatusCode::SERVICE_UNAVAILABLE, error)
        }
        ContractStatus::Absent => {
            let error = format!(
                "contract '{}' is absent: not running under the provisioner",
                report.profile()
            );
            ApiResponse::failure(report, StatusCode::SERVICE_UNAVAILABLE, error)
        }
    };

    Ok(response)
}
