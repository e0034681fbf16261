//! # Request Handlers
//!
//! Axum request handlers for the donation API.
//! Each payment route makes at most one provider call and never retries.

use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use donate_core::{
    CheckoutRequest, DonationAmount, DonationError, DonationResult, DonationType,
    PaymentIntentRequest, RedirectUrls,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info, instrument, warn};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Donation checkout request body
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCheckoutRequest {
    /// Amount in pounds; a number or numeric string
    #[serde(default)]
    pub amount: Option<Value>,
    /// `"one-time"` or `"monthly"`; anything else means one-time
    #[serde(default)]
    pub donation_type: Option<Value>,
}

impl CreateCheckoutRequest {
    pub fn donation_type(&self) -> DonationType {
        DonationType::from_selector(self.donation_type.as_ref().and_then(Value::as_str))
    }
}

/// Checkout response: where to send the donor
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub url: String,
}

/// Payment intent response for the embedded form
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    pub client_secret: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Log the full error and turn it into a client-safe response
fn donation_error_to_response(err: DonationError) -> ApiError {
    if err.is_validation() {
        warn!("Rejected donation request: {}", err);
    } else {
        error!("Donation request failed: {}", err);
    }

    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::new(err.public_message())))
}

/// Parse a JSON body; an empty body counts as `{}`
fn parse_body(body: &Bytes) -> DonationResult<CreateCheckoutRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(CreateCheckoutRequest::default());
    }
    serde_json::from_slice(body).map_err(|e| DonationError::InvalidRequest(e.to_string()))
}

fn redirect_urls(state: &AppState, headers: &HeaderMap) -> RedirectUrls {
    let origin = headers
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok());
    RedirectUrls::from_origin(origin, &state.config.default_origin)
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "donate-server",
        "version": env!("CARGO_PKG_VERSION"),
        "stripe_configured": state.provider.is_some()
    }))
}

/// Create a checkout session for a donor-chosen amount
#[instrument(skip(state, headers, body))]
pub async fn create_checkout(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<CheckoutResponse>, ApiError> {
    let provider = state.provider().map_err(donation_error_to_response)?;

    let request = parse_body(&body).map_err(donation_error_to_response)?;
    let amount =
        DonationAmount::from_json(request.amount.as_ref()).map_err(donation_error_to_response)?;
    let donation_type = request.donation_type();
    let urls = redirect_urls(&state, &headers);

    info!(
        "Creating donation checkout: amount={}, type={}, origin={}",
        amount.to_money().display(),
        donation_type,
        urls.origin
    );

    let checkout = CheckoutRequest::for_amount(amount, donation_type, &urls);
    let session = provider
        .create_checkout_session(&checkout)
        .await
        .map_err(donation_error_to_response)?;

    Ok(Json(CheckoutResponse {
        url: session.checkout_url,
    }))
}

/// Create a checkout session against the pre-registered price for a donation type
#[instrument(skip(state, headers, body))]
pub async fn create_donation(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<CheckoutResponse>, ApiError> {
    let provider = state.provider().map_err(donation_error_to_response)?;

    let request = parse_body(&body).map_err(donation_error_to_response)?;
    let donation_type = request.donation_type();
    let urls = redirect_urls(&state, &headers);

    info!(
        "Creating donation checkout: type={}, origin={}",
        donation_type, urls.origin
    );

    let checkout = CheckoutRequest::for_price(&state.prices, donation_type, &urls);
    let session = provider
        .create_checkout_session(&checkout)
        .await
        .map_err(donation_error_to_response)?;

    Ok(Json(CheckoutResponse {
        url: session.checkout_url,
    }))
}

/// Create a fixed-amount payment intent for the embedded payment form
#[instrument(skip(state))]
pub async fn create_payment_intent(
    State(state): State<AppState>,
) -> Result<Json<PaymentIntentResponse>, ApiError> {
    let provider = state.provider().map_err(donation_error_to_response)?;

    info!("Creating payment intent for donation");

    let intent = provider
        .create_payment_intent(&PaymentIntentRequest::donation())
        .await
        .map_err(donation_error_to_response)?;

    Ok(Json(PaymentIntentResponse {
        client_secret: intent.client_secret,
    }))
}
