//! # donate-core
//!
//! Core types and traits for the charity donation checkout service.
//!
//! This crate provides:
//! - `DonationAmount` validation against the accepted `[£0.30, £10000]` range
//! - `DonationType` and the `DonationPrices` mapping for pre-registered prices
//! - `RedirectUrls` for the success/cancel pages of a checkout
//! - `CheckoutRequest` and `PaymentIntentRequest` for the provider calls
//! - `DonationProvider` trait for implementing payment providers
//! - `DonationError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use donate_core::{CheckoutRequest, DonationAmount, DonationType, RedirectUrls};
//!
//! let amount = DonationAmount::new(25.0)?;
//! let urls = RedirectUrls::from_origin(Some("https://charity.example"), DEFAULT_ORIGIN);
//! let request = CheckoutRequest::for_amount(amount, DonationType::OneTime, &urls);
//!
//! let session = provider.create_checkout_session(&request).await?;
//! // Redirect the donor to session.checkout_url
//! ```

pub mod checkout;
pub mod donation;
pub mod error;
pub mod money;
pub mod provider;
pub mod redirect;

// Re-exports for convenience
pub use checkout::{
    CheckoutLineItem, CheckoutRequest, CheckoutSession, PaymentIntent, PaymentIntentRequest,
    DONATION_METADATA_TYPE, PAYMENT_INTENT_AMOUNT,
};
pub use donation::{
    CheckoutMode, DonationAmount, DonationPrices, DonationType, MAX_DONATION_AMOUNT,
    MIN_DONATION_AMOUNT,
};
pub use error::{DonationError, DonationResult, GENERIC_FAILURE_MESSAGE};
pub use money::{Currency, Money, DONATION_CURRENCY};
pub use provider::{BoxedDonationProvider, DonationProvider};
pub use redirect::{RedirectUrls, DEFAULT_ORIGIN, DONATE_PATH};
