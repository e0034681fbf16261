//! # Checkout Types
//!
//! Requests handed to a donation provider and the records it hands back.
//! Provider records are opaque to us: we keep only the fields the handlers
//! log or return.

use crate::donation::{CheckoutMode, DonationAmount, DonationPrices, DonationType};
use crate::money::{Money, DONATION_CURRENCY};
use crate::redirect::RedirectUrls;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fixed amount of an embedded-form payment intent, in minor units
pub const PAYMENT_INTENT_AMOUNT: i64 = 30;

/// Metadata tag applied to everything we create at the provider
pub const DONATION_METADATA_TYPE: &str = "donation";

/// The single line item of a donation checkout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckoutLineItem {
    /// A price pre-registered with the provider
    Price { price_id: String },
    /// A price created inline from the donor's chosen amount
    Dynamic {
        name: String,
        unit_amount: Money,
        /// Bill monthly instead of once
        recurring: bool,
    },
}

impl CheckoutLineItem {
    /// Quantity is always one; the amount carries the donation size
    pub fn quantity(&self) -> u32 {
        1
    }
}

/// Everything a provider needs to create a hosted checkout session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub line_item: CheckoutLineItem,
    pub mode: CheckoutMode,
    pub success_url: String,
    pub cancel_url: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl CheckoutRequest {
    /// Checkout for a donor-chosen amount
    pub fn for_amount(
        amount: DonationAmount,
        donation_type: DonationType,
        urls: &RedirectUrls,
    ) -> Self {
        Self::new(
            CheckoutLineItem::Dynamic {
                name: donation_type.line_item_name().to_string(),
                unit_amount: amount.to_money(),
                recurring: donation_type == DonationType::Monthly,
            },
            donation_type,
            urls,
        )
    }

    /// Checkout against the pre-registered price for a donation type
    pub fn for_price(
        prices: &DonationPrices,
        donation_type: DonationType,
        urls: &RedirectUrls,
    ) -> Self {
        Self::new(
            CheckoutLineItem::Price {
                price_id: prices.price_for(donation_type).to_string(),
            },
            donation_type,
            urls,
        )
    }

    fn new(line_item: CheckoutLineItem, donation_type: DonationType, urls: &RedirectUrls) -> Self {
        let mut metadata = BTreeMap::new();
        metadata.insert("type".to_string(), DONATION_METADATA_TYPE.to_string());
        metadata.insert("donation_type".to_string(), donation_type.as_str().to_string());

        Self {
            line_item,
            mode: donation_type.checkout_mode(),
            success_url: urls.success_url(),
            cancel_url: urls.cancel_url(),
            metadata,
        }
    }
}

/// A checkout session created by the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Provider's session ID
    pub session_id: String,

    /// Provider name (e.g., "stripe")
    pub provider: String,

    /// Hosted page the donor is redirected to
    pub checkout_url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Everything a provider needs to create a payment intent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentIntentRequest {
    pub amount: Money,
    /// Let the provider pick payment methods for the embedded form
    pub automatic_payment_methods: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl PaymentIntentRequest {
    /// The fixed-amount donation intent used by the embedded form
    pub fn donation() -> Self {
        let mut metadata = BTreeMap::new();
        metadata.insert("type".to_string(), DONATION_METADATA_TYPE.to_string());

        Self {
            amount: Money::from_minor(PAYMENT_INTENT_AMOUNT, DONATION_CURRENCY),
            automatic_payment_methods: true,
            metadata,
        }
    }
}

/// A payment intent created by the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntent {
    pub intent_id: String,
    pub provider: String,
    /// Secret the embedded form confirms the payment with
    pub client_secret: String,
}
