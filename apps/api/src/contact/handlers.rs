//! Axum route handlers for the Contact and Newsletter APIs.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::contact::is_plausible_email;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Contact form
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

/// POST /api/v1/contact
///
/// Relays the submission to the form endpoint. Errors surface as RELAY_ERROR
/// and are meant to be shown inline within the form.
pub async fn handle_contact(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, AppError> {
    if request.name.trim().is_empty()
        || request.email.trim().is_empty()
        || request.message.trim().is_empty()
    {
        return Err(AppError::Validation(
            "name, email, and message are all required".to_string(),
        ));
    }

    let confirmation = state
        .contact_relay
        .send(&request.name, &request.email, &request.message)
        .await?;

    Ok(Json(ContactResponse {
        success: true,
        message: confirmation,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Newsletter (stub collaborator — no real network call)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct NewsletterRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct NewsletterResponse {
    pub subscribed: bool,
}

/// POST /api/v1/newsletter
///
/// Simulated subscription: validates the address shape and reports success.
pub async fn handle_newsletter(
    Json(request): Json<NewsletterRequest>,
) -> Result<Json<NewsletterResponse>, AppError> {
    if !is_plausible_email(&request.email) {
        return Err(AppError::Validation(
            "a valid email address is required".to_string(),
        ));
    }

    info!("Newsletter signup accepted");

    Ok(Json(NewsletterResponse { subscribed: true }))
}
