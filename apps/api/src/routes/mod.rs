pub mod health;

use axum::{routing::get, routing::post, Router};

use crate::advice::handlers as advice_handlers;
use crate::contact::handlers as contact_handlers;
use crate::salary::handlers as salary_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Advice API
        .route(
            "/api/v1/advice",
            post(advice_handlers::handle_generate_advice),
        )
        // Salary API
        .route(
            "/api/v1/salary/estimate",
            post(salary_handlers::handle_estimate),
        )
        // Contact + newsletter
        .route("/api/v1/contact", post(contact_handlers::handle_contact))
        .route(
            "/api/v1/newsletter",
            post(contact_handlers::handle_newsletter),
        )
        .with_state(state)
}
