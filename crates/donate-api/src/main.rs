//! # Donate Server
//!
//! Donation checkout endpoints for the charity website.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export STRIPE_SECRET_KEY=sk_test_...
//! export DEFAULT_ORIGIN=https://charity.example
//!
//! # Run the server
//! donate-server
//! ```

use donate_api::{
    routes,
    state::{AppConfig, AppState, LogFormat},
};
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();

    init_tracing(config.log_format);

    let state = AppState::from_config(config)?;
    let addr = state.config.socket_addr()?;
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Default redirect origin: {}", state.config.default_origin);
    match &state.provider {
        Some(provider) => info!("Payment provider: {}", provider.provider_name()),
        None => warn!("No payment provider configured, payment routes will return 500"),
    }

    let app = routes::create_router(state);

    info!("Donate server starting on http://{}", addr);

    if !is_prod {
        info!("Checkout: POST http://{}/api/v1/checkout", addr);
        info!("Donation: POST http://{}/api/v1/donation", addr);
        info!("Payment intent: POST http://{}/api/v1/payment-intent", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init(),
    }
}
