//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;
use serde_json::json;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub store: &'static str,
}

/// Health check endpoint - returns server status.
///
/// GET /health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let response = HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
        store: state.posts.backend(),
    };

    HttpResponse::Ok().json(response)
}

/// Greeting at the service root.
///
/// GET /
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "Hello": "World" }))
}
