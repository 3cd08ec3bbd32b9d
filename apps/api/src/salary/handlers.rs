//! Axum route handlers for the Salary API.

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::salary::{estimate, ExperienceTier, Region, SalaryEstimate};

#[derive(Debug, Deserialize)]
pub struct EstimateRequest {
    pub role: String,
    pub experience: String,
    pub region: String,
}

#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub amount: i64,
    pub currency: &'static str,
    pub formatted: String,
}

/// POST /api/v1/salary/estimate
///
/// Unknown region or experience values are rejected outright rather than
/// silently defaulted.
pub async fn handle_estimate(
    Json(request): Json<EstimateRequest>,
) -> Result<Json<EstimateResponse>, AppError> {
    if request.role.trim().is_empty() {
        return Err(AppError::Validation("role cannot be empty".to_string()));
    }

    let region: Region = request.region.parse().map_err(AppError::Validation)?;
    let tier: ExperienceTier = request.experience.parse().map_err(AppError::Validation)?;

    let SalaryEstimate {
        amount,
        currency,
        formatted,
    } = estimate(&request.role, tier, region, &mut rand::thread_rng());

    info!(
        "Salary estimate: role={:?} tier={:?} region={:?} → {currency}{formatted}",
        request.role, tier, region
    );

    Ok(Json(EstimateResponse {
        amount,
        currency,
        formatted,
    }))
}
