//! # Donation Provider Trait
//!
//! Seam between the HTTP handlers and the payment provider. The Stripe
//! implementation lives in `donate-stripe`; tests substitute a fake.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │          DonationProvider (trait)            │
//! │  ├── create_checkout_session()               │
//! │  ├── create_payment_intent()                 │
//! │  └── provider_name()                         │
//! └──────────────────────────────────────────────┘
//!                       ▲
//!               ┌───────┴───────┐
//!               │StripeProvider │
//!               └───────────────┘
//! ```

use crate::checkout::{CheckoutRequest, CheckoutSession, PaymentIntent, PaymentIntentRequest};
use crate::error::DonationResult;
use async_trait::async_trait;
use std::sync::Arc;

/// A payment provider able to take donations.
///
/// Each call makes exactly one request to the provider and never retries;
/// failures surface directly to the caller.
#[async_trait]
pub trait DonationProvider: Send + Sync {
    /// Create a hosted checkout session and return its redirect URL.
    async fn create_checkout_session(
        &self,
        request: &CheckoutRequest,
    ) -> DonationResult<CheckoutSession>;

    /// Create a payment intent for an embedded payment form.
    async fn create_payment_intent(
        &self,
        request: &PaymentIntentRequest,
    ) -> DonationResult<PaymentIntent>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared provider (dynamic dispatch)
pub type BoxedDonationProvider = Arc<dyn DonationProvider>;
