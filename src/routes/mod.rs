// src/routes/mod.rs
pub mod alerts;
pub mod chat;
pub mod reminders;

use crate::{message::StatusResponse, state::SharedState};
use axum::{
    Json, Router,
    http::HeaderValue,
    routing::{get, post},
};
use alerts::get_alerts_handler;
use chat::chat_handler;
use reminders::create_reminder_handler;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub const LIVENESS_STATUS: &str = "Arogya AI backend is running!";

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/chat", post(chat_handler))
        .route("/api/reminders", post(create_reminder_handler))
        .route("/api/alerts", get(get_alerts_handler))
        .layer(TraceLayer::new_for_http())
}

/// Single allowed origin with credentials. Other origins get no allow-origin
/// header. Wildcards are not valid alongside credentials, so methods and
/// headers mirror the preflight request.
pub fn cors_layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

async fn root_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: LIVENESS_STATUS.to_string(),
    })
}
