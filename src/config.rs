use std::net::SocketAddr;

use stripe::Currency;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingEnvVar(&'static str),
    #[error("invalid value for {var}: {value}")]
    InvalidValue { var: &'static str, value: String },
}

/// Process-wide configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub stripe_secret_key: String,
    pub currency: Currency,
    pub bind_addr: SocketAddr,
}

pub const DEFAULT_CURRENCY: &str = "myr";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

impl AppConfig {
    /// Reads configuration from the environment. `STRIPE_SECRET_KEY` is
    /// required; `PAYMENT_CURRENCY` and `BIND_ADDR` fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let stripe_secret_key = std::env::var("STRIPE_SECRET_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("STRIPE_SECRET_KEY"))?;

        let currency_code =
            std::env::var("PAYMENT_CURRENCY").unwrap_or_else(|_| DEFAULT_CURRENCY.to_string());
        let currency = currency_code
            .parse::<Currency>()
            .map_err(|_| ConfigError::InvalidValue {
                var: "PAYMENT_CURRENCY",
                value: currency_code,
            })?;

        let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidValue {
                var: "BIND_ADDR",
                value: addr,
            })?;

        Ok(Self {
            stripe_secret_key,
            currency,
            bind_addr,
        })
    }
}
