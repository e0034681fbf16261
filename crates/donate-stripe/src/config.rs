//! # Stripe Configuration
//!
//! Configuration management for Stripe integration.
//! The secret key is loaded from the `STRIPE_SECRET_KEY` environment variable.

use donate_core::DonationError;
use std::env;

/// Environment variable holding the Stripe secret key
pub const SECRET_KEY_VAR: &str = "STRIPE_SECRET_KEY";

const DEFAULT_API_BASE_URL: &str = "https://api.stripe.com";
const DEFAULT_API_VERSION: &str = "2025-08-27.basil";

const SECRET_KEY_PREFIXES: [&str; 4] = ["sk_test_", "sk_live_", "rk_test_", "rk_live_"];

/// Stripe API configuration
#[derive(Clone)]
pub struct StripeConfig {
    /// Secret or restricted API key (sk_test_..., sk_live_..., rk_...)
    pub secret_key: String,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,

    /// API version
    pub api_version: String,
}

impl StripeConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `STRIPE_SECRET_KEY`
    pub fn from_env() -> Result<Self, DonationError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_secret_key(env::var(SECRET_KEY_VAR).ok())
    }

    /// Build a validated config from a possibly missing key.
    ///
    /// Absent and blank keys are both reported as not set.
    pub fn from_secret_key(secret_key: Option<String>) -> Result<Self, DonationError> {
        let secret_key = secret_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| DonationError::Configuration(format!("{} is not set", SECRET_KEY_VAR)))?;

        let config = Self::new(secret_key);
        config.validate()?;
        Ok(config)
    }

    /// Create config with an explicit key (for testing)
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    /// Check the key looks like a Stripe server-side key
    pub fn validate(&self) -> Result<(), DonationError> {
        if !SECRET_KEY_PREFIXES
            .iter()
            .any(|prefix| self.secret_key.starts_with(prefix))
        {
            return Err(DonationError::Configuration(format!(
                "{} must start with sk_test_, sk_live_, rk_test_ or rk_live_",
                SECRET_KEY_VAR
            )));
        }
        Ok(())
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.secret_key)
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

impl std::fmt::Debug for StripeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeConfig")
            .field("secret_key", &"<redacted>")
            .field("api_base_url", &self.api_base_url)
            .field("api_version", &self.api_version)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let config = StripeConfig::new("sk_test_abc123");
        assert!(config.validate().is_ok());

        let config = StripeConfig::new("sk_live_abc123");
        assert!(config.validate().is_ok());

        assert!(StripeConfig::new("rk_test_abc123").validate().is_ok());
        assert!(StripeConfig::new("pk_test_abc123").validate().is_err());
        assert!(StripeConfig::new("").validate().is_err());
    }

    #[test]
    fn test_auth_header() {
        let config = StripeConfig::new("sk_test_abc123");
        assert_eq!(config.auth_header(), "Bearer sk_test_abc123");
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = StripeConfig::new("sk_test_abc123");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk_test_abc123"));
        assert!(debug.contains("api.stripe.com"));
    }

    #[test]
    fn test_missing_or_blank_key() {
        let result = StripeConfig::from_secret_key(None);
        assert!(matches!(result, Err(DonationError::Configuration(_))));

        let result = StripeConfig::from_secret_key(Some("   ".to_string()));
        assert!(matches!(result, Err(DonationError::Configuration(_))));
    }

    #[test]
    fn test_from_secret_key_validates_prefix() {
        let result = StripeConfig::from_secret_key(Some("pk_test_abc123".to_string()));
        assert!(matches!(result, Err(DonationError::Configuration(_))));

        let config = StripeConfig::from_secret_key(Some("sk_test_abc123".to_string())).unwrap();
        assert_eq!(config.auth_header(), "Bearer sk_test_abc123");
    }
}
