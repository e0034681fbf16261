//! # Routes
//!
//! Axum router configuration for the donation API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    http::{HeaderName, Method},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Request headers the donate page's client library sends
const ALLOWED_HEADERS: [&str; 4] = ["authorization", "x-client-info", "apikey", "content-type"];

/// CORS for the donate page: any origin, answered preflight on every route
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(ALLOWED_HEADERS.map(HeaderName::from_static))
}

/// Create the main application router
///
/// Routes:
/// - POST /api/v1/checkout - Checkout session for a chosen amount
/// - POST /api/v1/donation - Checkout session for a pre-registered price
/// - POST /api/v1/payment-intent - Payment intent for the embedded form
/// - GET  /health - Health check
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/checkout", post(handlers::create_checkout))
        .route("/donation", post(handlers::create_donation))
        .route("/payment-intent", post(handlers::create_payment_intent));

    Router::new()
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer()),
        )
        .with_state(state)
}
