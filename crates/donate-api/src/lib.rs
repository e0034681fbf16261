//! # donate-api
//!
//! HTTP API layer for the charity donation checkout service.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - Checkout session and payment intent endpoints for the donate page
//! - Permissive CORS so the site can call the API from any origin
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/api/v1/checkout` | Checkout session for `{amount, donationType?}` |
//! | POST | `/api/v1/donation` | Checkout session for `{donationType}` |
//! | POST | `/api/v1/payment-intent` | Payment intent, returns `{clientSecret}` |
//!
//! Every route answers `OPTIONS` preflight with an empty 200.

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
