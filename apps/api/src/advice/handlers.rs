//! Axum route handlers for the Advice API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::advice::generator::generate_advice;
use crate::errors::AppError;
use crate::models::advice::CareerAdvice;
use crate::models::profile::UserProfile;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AdviceResponse {
    pub advice: CareerAdvice,
}

/// POST /api/v1/advice
///
/// Takes a full user profile and returns structured career advice from the
/// LLM. Fails with CONFIGURATION_ERROR when no API key is set — checked
/// before any network call.
pub async fn handle_generate_advice(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<AdviceResponse>, AppError> {
    if profile.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    let advice = generate_advice(state.llm.as_ref(), profile).await?;

    Ok(Json(AdviceResponse { advice }))
}
