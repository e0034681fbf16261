//! # Donation Types
//!
//! Donation amount validation, the one-time/monthly selector and the
//! pre-registered price mapping.

use crate::error::{DonationError, DonationResult};
use crate::money::{Money, DONATION_CURRENCY};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Smallest accepted donation in major units (Stripe's minimum GBP charge)
pub const MIN_DONATION_AMOUNT: f64 = 0.30;

/// Largest accepted donation in major units
pub const MAX_DONATION_AMOUNT: f64 = 10_000.0;

/// A donation amount that has passed range validation.
///
/// Always within `[MIN_DONATION_AMOUNT, MAX_DONATION_AMOUNT]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonationAmount(f64);

impl DonationAmount {
    /// Validate an amount given in major units (pounds)
    pub fn new(amount: f64) -> DonationResult<Self> {
        if !amount.is_finite() {
            return Err(DonationError::InvalidAmount(
                "Donation amount must be a number".to_string(),
            ));
        }
        if amount < MIN_DONATION_AMOUNT {
            return Err(DonationError::InvalidAmount(format!(
                "Donation amount must be at least {}",
                Money::new(MIN_DONATION_AMOUNT, DONATION_CURRENCY).display()
            )));
        }
        if amount > MAX_DONATION_AMOUNT {
            return Err(DonationError::InvalidAmount(format!(
                "Donation amount must not exceed {}",
                Money::new(MAX_DONATION_AMOUNT, DONATION_CURRENCY).display()
            )));
        }
        Ok(Self(amount))
    }

    /// Validate the `amount` field of a request body.
    ///
    /// Accepts JSON numbers and numeric strings. `None` and `null` are
    /// treated as missing.
    pub fn from_json(value: Option<&Value>) -> DonationResult<Self> {
        let amount = match value {
            None | Some(Value::Null) => {
                return Err(DonationError::InvalidAmount(
                    "Donation amount is required".to_string(),
                ))
            }
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            Some(_) => None,
        };

        let amount = amount.ok_or_else(|| {
            DonationError::InvalidAmount("Donation amount must be a number".to_string())
        })?;

        Self::new(amount)
    }

    /// Amount in minor units, `round(amount * 100)`
    pub fn minor_units(&self) -> i64 {
        DONATION_CURRENCY.to_minor_units(self.0)
    }

    pub fn to_money(&self) -> Money {
        Money::from_minor(self.minor_units(), DONATION_CURRENCY)
    }
}

/// One-time or monthly giving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DonationType {
    #[serde(rename = "one-time")]
    OneTime,
    #[serde(rename = "monthly")]
    Monthly,
}

impl DonationType {
    /// Interpret the client's `donationType` selector.
    ///
    /// Only `"monthly"` selects monthly giving, anything else (including
    /// no selector at all) is a one-time donation.
    pub fn from_selector(selector: Option<&str>) -> Self {
        match selector {
            Some("monthly") => DonationType::Monthly,
            _ => DonationType::OneTime,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DonationType::OneTime => "one-time",
            DonationType::Monthly => "monthly",
        }
    }

    /// Checkout mode the provider needs for this kind of donation
    pub fn checkout_mode(&self) -> CheckoutMode {
        match self {
            DonationType::OneTime => CheckoutMode::Payment,
            DonationType::Monthly => CheckoutMode::Subscription,
        }
    }

    /// Product name shown on the hosted checkout page
    pub fn line_item_name(&self) -> &'static str {
        match self {
            DonationType::OneTime => "Donation",
            DonationType::Monthly => "Monthly donation",
        }
    }
}

impl Default for DonationType {
    fn default() -> Self {
        DonationType::OneTime
    }
}

impl std::fmt::Display for DonationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checkout mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutMode {
    /// One-time payment
    Payment,
    /// Recurring subscription
    Subscription,
}

impl CheckoutMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutMode::Payment => "payment",
            CheckoutMode::Subscription => "subscription",
        }
    }
}

impl Default for CheckoutMode {
    fn default() -> Self {
        CheckoutMode::Payment
    }
}

/// Pre-registered provider prices, one per donation type.
///
/// Loaded from `config/donations.toml`:
///
/// ```toml
/// [prices]
/// one_time = "price_..."
/// monthly = "price_..."
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationPrices {
    pub one_time: String,
    pub monthly: String,
}

impl DonationPrices {
    pub const DEFAULT_ONE_TIME: &'static str = "price_1Sf8pDBsVocdQ65XceOCi6qT";
    pub const DEFAULT_MONTHLY: &'static str = "price_1Sf8pYBsVocdQ65X0vv2zA5E";

    pub fn new(one_time: impl Into<String>, monthly: impl Into<String>) -> Self {
        Self {
            one_time: one_time.into(),
            monthly: monthly.into(),
        }
    }

    /// Price id registered for a donation type
    pub fn price_for(&self, donation_type: DonationType) -> &str {
        match donation_type {
            DonationType::OneTime => &self.one_time,
            DonationType::Monthly => &self.monthly,
        }
    }

    /// Load the `[prices]` table from a TOML document
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        #[derive(Deserialize)]
        struct DonationsFile {
            prices: DonationPrices,
        }

        toml::from_str::<DonationsFile>(toml_str).map(|file| file.prices)
    }
}

impl Default for DonationPrices {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ONE_TIME, Self::DEFAULT_MONTHLY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_amount_bounds() {
        assert!(DonationAmount::new(0.29).is_err());
        assert!(DonationAmount::new(0.30).is_ok());
        assert!(DonationAmount::new(10_000.0).is_ok());
        assert!(DonationAmount::new(10_000.01).is_err());
        assert!(DonationAmount::new(-5.0).is_err());
        assert!(DonationAmount::new(f64::NAN).is_err());
        assert!(DonationAmount::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_minor_units() {
        assert_eq!(DonationAmount::new(25.0).unwrap().minor_units(), 2500);
        assert_eq!(DonationAmount::new(0.30).unwrap().minor_units(), 30);
        assert_eq!(DonationAmount::new(19.99).unwrap().minor_units(), 1999);
        assert_eq!(DonationAmount::new(10_000.0).unwrap().minor_units(), 1_000_000);
    }

    #[test]
    fn test_amount_from_json() {
        let amount = DonationAmount::from_json(Some(&json!(25))).unwrap();
        assert_eq!(amount.minor_units(), 2500);

        let amount = DonationAmount::from_json(Some(&json!("12.50"))).unwrap();
        assert_eq!(amount.minor_units(), 1250);

        let err = DonationAmount::from_json(None).unwrap_err();
        assert_eq!(err.to_string(), "Donation amount is required");

        let err = DonationAmount::from_json(Some(&Value::Null)).unwrap_err();
        assert_eq!(err.to_string(), "Donation amount is required");

        for bad in [json!("twenty"), json!(true), json!({"value": 5}), json!("NaN")] {
            let err = DonationAmount::from_json(Some(&bad)).unwrap_err();
            assert_eq!(err.to_string(), "Donation amount must be a number");
        }
    }

    #[test]
    fn test_amount_error_messages() {
        let err = DonationAmount::new(0.10).unwrap_err();
        assert_eq!(err.to_string(), "Donation amount must be at least £0.30");

        let err = DonationAmount::new(20_000.0).unwrap_err();
        assert_eq!(err.to_string(), "Donation amount must not exceed £10000.00");
    }

    #[test]
    fn test_donation_type_selector() {
        assert_eq!(DonationType::from_selector(Some("monthly")), DonationType::Monthly);
        assert_eq!(DonationType::from_selector(Some("one-time")), DonationType::OneTime);
        assert_eq!(DonationType::from_selector(Some("yearly")), DonationType::OneTime);
        assert_eq!(DonationType::from_selector(Some("Monthly")), DonationType::OneTime);
        assert_eq!(DonationType::from_selector(None), DonationType::OneTime);
    }

    #[test]
    fn test_checkout_mode() {
        assert_eq!(DonationType::OneTime.checkout_mode(), CheckoutMode::Payment);
        assert_eq!(DonationType::Monthly.checkout_mode(), CheckoutMode::Subscription);
        assert_eq!(CheckoutMode::Subscription.as_str(), "subscription");
    }

    #[test]
    fn test_price_mapping() {
        let prices = DonationPrices::default();
        assert_eq!(prices.price_for(DonationType::OneTime), DonationPrices::DEFAULT_ONE_TIME);
        assert_eq!(prices.price_for(DonationType::Monthly), DonationPrices::DEFAULT_MONTHLY);
    }

    #[test]
    fn test_prices_from_toml() {
        let prices = DonationPrices::from_toml(
            r#"
            [prices]
            one_time = "price_once"
            monthly = "price_month"
            "#,
        )
        .unwrap();

        assert_eq!(prices, DonationPrices::new("price_once", "price_month"));
        assert!(DonationPrices::from_toml("[prices]\none_time = \"x\"").is_err());
    }
}
