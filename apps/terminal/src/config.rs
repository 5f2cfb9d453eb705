//! Terminal configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults, so a plain `kassa` invocation works out of the box.

use std::env;

use rust_decimal::Decimal;

use kassa_core::Money;

/// Terminal configuration.
#[derive(Debug, Clone)]
pub struct TerminalConfig {
    /// Path of the append-only receipt log.
    pub receipts_path: String,

    /// Customer display name for the session.
    pub customer_name: String,

    /// Starting cash balance.
    pub starting_cash: Money,

    /// Starting bonus-point balance.
    pub starting_bonus: Money,
}

impl TerminalConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(TerminalConfig {
            receipts_path: env::var("KASSA_RECEIPTS_PATH")
                .unwrap_or_else(|_| "receipts.txt".to_string()),

            customer_name: env::var("KASSA_CUSTOMER_NAME")
                .unwrap_or_else(|_| "Покупатель".to_string()),

            starting_cash: parse_money("KASSA_STARTING_CASH", "50000.0")?,

            starting_bonus: parse_money("KASSA_STARTING_BONUS", "7000.0")?,
        })
    }
}

fn parse_money(var: &str, default: &str) -> Result<Money, ConfigError> {
    let raw = env::var(var).unwrap_or_else(|_| default.to_string());
    let amount: Decimal = raw
        .parse()
        .map_err(|_| ConfigError::InvalidValue(var.to_string()))?;
    if amount < Decimal::ZERO {
        return Err(ConfigError::InvalidValue(var.to_string()));
    }
    Ok(Money::new(amount))
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
