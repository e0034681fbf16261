//! # Stripe Provider
//!
//! `DonationProvider` implementation backed by the Stripe REST API.
//! Requests are form-encoded POSTs; every call carries a fresh idempotency key.

use crate::checkout::{checkout_form_params, StripeCheckoutSessionResponse};
use crate::config::StripeConfig;
use crate::payment_intent::{payment_intent_form_params, StripePaymentIntentResponse};
use async_trait::async_trait;
use chrono::DateTime;
use donate_core::{
    CheckoutRequest, CheckoutSession, DonationError, DonationProvider, DonationResult,
    PaymentIntent, PaymentIntentRequest,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

const PROVIDER: &str = "stripe";

/// Stripe donation provider
pub struct StripeProvider {
    config: StripeConfig,
    client: Client,
}

impl StripeProvider {
    /// Create a new Stripe provider
    pub fn new(config: StripeConfig) -> DonationResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| {
                DonationError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> DonationResult<Self> {
        let config = StripeConfig::from_env()?;
        Self::new(config)
    }

    /// POST form params to a Stripe endpoint and decode the JSON reply
    async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form_params: &[(String, String)],
    ) -> DonationResult<T> {
        let url = format!("{}{}", self.config.api_base_url, path);
        let idempotency_key = Uuid::new_v4().to_string();

        debug!("POST {} ({} params)", path, form_params.len());

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.config.auth_header())
            .header("Stripe-Version", &self.config.api_version)
            .header("Idempotency-Key", &idempotency_key)
            .form(form_params)
            .send()
            .await
            .map_err(|e| DonationError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DonationError::NetworkError(e.to_string()))?;

        if !status.is_success() {
            error!("Stripe API error: status={}, body={}", status, body);

            if let Ok(error_response) = serde_json::from_str::<StripeErrorResponse>(&body) {
                return Err(DonationError::ProviderError {
                    provider: PROVIDER.to_string(),
                    message: error_response.error.message,
                });
            }

            return Err(DonationError::ProviderError {
                provider: PROVIDER.to_string(),
                message: format!("HTTP {}: {}", status, body),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            DonationError::Serialization(format!("Failed to parse Stripe response: {}", e))
        })
    }
}

#[async_trait]
impl DonationProvider for StripeProvider {
    #[instrument(skip(self, request), fields(mode = request.mode.as_str()))]
    async fn create_checkout_session(
        &self,
        request: &CheckoutRequest,
    ) -> DonationResult<CheckoutSession> {
        let form_params = checkout_form_params(request);

        let session: StripeCheckoutSessionResponse =
            self.post_form("/v1/checkout/sessions", &form_params).await?;

        let checkout_url = session.url.ok_or_else(|| DonationError::ProviderError {
            provider: PROVIDER.to_string(),
            message: format!("Checkout session {} has no redirect URL", session.id),
        })?;

        info!("Checkout session created: {}", session.id);

        Ok(CheckoutSession {
            session_id: session.id,
            provider: PROVIDER.to_string(),
            checkout_url,
            expires_at: session
                .expires_at
                .and_then(|ts| DateTime::from_timestamp(ts, 0)),
        })
    }

    #[instrument(skip(self, request), fields(amount = request.amount.amount))]
    async fn create_payment_intent(
        &self,
        request: &PaymentIntentRequest,
    ) -> DonationResult<PaymentIntent> {
        let form_params = payment_intent_form_params(request);

        let intent: StripePaymentIntentResponse =
            self.post_form("/v1/payment_intents", &form_params).await?;

        let client_secret = intent.client_secret.ok_or_else(|| DonationError::ProviderError {
            provider: PROVIDER.to_string(),
            message: format!("Payment intent {} has no client secret", intent.id),
        })?;

        info!("Payment intent created: {}", intent.id);

        Ok(PaymentIntent {
            intent_id: intent.id,
            provider: PROVIDER.to_string(),
            client_secret,
        })
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}

// =============================================================================
// Stripe API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeError,
}

#[derive(Debug, Deserialize)]
struct StripeError {
    message: String,
    #[serde(default)]
    #[allow(dead_code)]
    code: Option<String>,
}
