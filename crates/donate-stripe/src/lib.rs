//! # donate-stripe
//!
//! Stripe donation provider for the charity checkout service.
//!
//! `StripeProvider` implements `DonationProvider` with two Stripe calls:
//!
//! 1. **Checkout Sessions** - hosted checkout page
//!    - Dynamic `price_data` from the donor's amount, or a pre-registered price
//!    - `payment` mode for one-time gifts, `subscription` for monthly
//!
//! 2. **Payment Intents** - embedded payment form
//!    - Fixed amount, automatic payment methods
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use donate_stripe::StripeProvider;
//! use donate_core::{DonationProvider, PaymentIntentRequest};
//!
//! // Create provider from environment (STRIPE_SECRET_KEY)
//! let provider = StripeProvider::from_env()?;
//!
//! let intent = provider
//!     .create_payment_intent(&PaymentIntentRequest::donation())
//!     .await?;
//!
//! // Hand intent.client_secret to the embedded form
//! ```

pub mod checkout;
pub mod client;
pub mod config;
pub mod payment_intent;

// Re-exports
pub use checkout::checkout_form_params;
pub use client::StripeProvider;
pub use config::{StripeConfig, SECRET_KEY_VAR};
pub use payment_intent::payment_intent_form_params;
