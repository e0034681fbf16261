//! # Application State
//!
//! Shared state for the Axum application.
//! Contains the donation provider, configuration and price mapping.

use donate_core::{BoxedDonationProvider, DonationError, DonationPrices, DEFAULT_ORIGIN};
use donate_stripe::StripeProvider;
use std::sync::Arc;

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Origin used for redirect URLs when a request has no `Origin` header
    pub default_origin: String,
    /// Environment (development, staging, production)
    pub environment: String,
    /// Log output format
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Build from a variable lookup, falling back to defaults for unset names
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            host: var("HOST").unwrap_or(defaults.host),
            port: var("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            default_origin: var("DEFAULT_ORIGIN").unwrap_or(defaults.default_origin),
            environment: var("ENVIRONMENT").unwrap_or(defaults.environment),
            log_format: var("LOG_FORMAT")
                .map(|f| LogFormat::parse(&f))
                .unwrap_or(defaults.log_format),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<std::net::SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid socket address {}:{}: {}", self.host, self.port, e))
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            default_origin: DEFAULT_ORIGIN.to_string(),
            environment: "development".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Donation provider, absent when no credential is configured
    pub provider: Option<BoxedDonationProvider>,
    /// Pre-registered prices per donation type
    pub prices: DonationPrices,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create state with the Stripe provider.
    ///
    /// A missing or malformed Stripe key does not stop the server; the
    /// payment routes answer 500 until it is configured.
    pub fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let prices = load_donation_prices()?;

        let provider = match StripeProvider::from_env() {
            Ok(stripe) => Some(Arc::new(stripe) as BoxedDonationProvider),
            Err(DonationError::Configuration(reason)) => {
                tracing::warn!("Stripe is not configured: {}", reason);
                None
            }
            Err(e) => return Err(anyhow::anyhow!("Failed to initialize Stripe: {}", e)),
        };

        Ok(Self {
            provider,
            prices,
            config,
        })
    }

    /// Build state around an explicit provider
    pub fn with_provider(
        config: AppConfig,
        prices: DonationPrices,
        provider: Option<BoxedDonationProvider>,
    ) -> Self {
        Self {
            provider,
            prices,
            config,
        }
    }

    /// Get the provider or fail with a configuration error
    pub fn provider(&self) -> Result<&BoxedDonationProvider, DonationError> {
        self.provider.as_ref().ok_or_else(|| {
            DonationError::Configuration("STRIPE_SECRET_KEY is not set".to_string())
        })
    }
}

/// Load donation prices from config file
fn load_donation_prices() -> anyhow::Result<DonationPrices> {
    let config_paths = [
        "config/donations.toml",
        "../config/donations.toml",
        "../../config/donations.toml",
    ];

    for path in config_paths {
        if let Ok(content) = std::fs::read_to_string(path) {
            let prices = DonationPrices::from_toml(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path, e))?;
            tracing::info!("Loaded donation prices from {}", path);
            return Ok(prices);
        }
    }

    tracing::warn!("No donation price config found, using built-in prices");
    Ok(DonationPrices::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_defaults() {
        let config = AppConfig::from_vars(|_| None);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.default_origin, DEFAULT_ORIGIN);
        assert_eq!(config.environment, "development");
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_app_config_from_vars() {
        let config = AppConfig::from_vars(|name| match name {
            "HOST" => Some("0.0.0.0".to_string()),
            "PORT" => Some("3000".to_string()),
            "DEFAULT_ORIGIN" => Some("https://charity.example".to_string()),
            "LOG_FORMAT" => Some("json".to_string()),
            _ => None,
        });
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.default_origin, "https://charity.example");
        assert_eq!(config.log_format, LogFormat::Json);

        let config = AppConfig::from_vars(|name| (name == "PORT").then(|| "not-a-port".to_string()));
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_socket_addr() {
        let config = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            ..AppConfig::default()
        };

        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:3000");

        let config = AppConfig {
            host: "not a host".to_string(),
            ..AppConfig::default()
        };
        assert!(config.socket_addr().is_err());
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("anything"), LogFormat::Pretty);
    }

    #[test]
    fn test_missing_provider_is_configuration_error() {
        let state = AppState::with_provider(AppConfig::default(), DonationPrices::default(), None);

        let Err(err) = state.provider() else {
            panic!("expected configuration error");
        };
        assert!(matches!(err, DonationError::Configuration(_)));
        assert_eq!(err.status_code(), 500);
    }
}
