//! Configuration for the account service

use std::env;

use common::decimal::Amount;
use common::error::{Error, Result};

const DEFAULT_CUSTOMER_NAME: &str = "Anonymous";

/// Configuration for the account service
#[derive(Debug, Clone, PartialEq)]
pub struct AccountServiceConfig {
    /// Name the account is opened under
    pub customer_name: String,
    /// Balance the account is opened with
    pub opening_balance: Amount,
    /// Log every accepted operation at info level
    pub operation_logging: bool,
}

impl Default for AccountServiceConfig {
    fn default() -> Self {
        Self {
            customer_name: DEFAULT_CUSTOMER_NAME.to_string(),
            opening_balance: 0.0,
            operation_logging: true,
        }
    }
}

impl AccountServiceConfig {
    /// Create a new configuration using environment variables, falling back
    /// to defaults for anything missing or unparseable
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            customer_name: env::var("ACCOUNT_CUSTOMER_NAME").unwrap_or(defaults.customer_name),
            opening_balance: env::var("ACCOUNT_OPENING_BALANCE")
                .ok()
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.opening_balance),
            operation_logging: env::var("OPERATION_LOGGING")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.operation_logging),
        }
    }

    /// Like [`from_env`](Self::from_env), but an unparseable opening balance is an error
    pub fn try_from_env() -> Result<Self> {
        let mut config = Self::from_env();
        if let Ok(raw) = env::var("ACCOUNT_OPENING_BALANCE") {
            config.opening_balance = raw.trim().parse().map_err(|_| {
                Error::ConfigurationError(format!("ACCOUNT_OPENING_BALANCE is not a number: {}", raw))
            })?;
        }
        Ok(config)
    }

    /// Create a new configuration with custom values
    pub fn new(customer_name: impl Into<String>, opening_balance: Amount, operation_logging: bool) -> Self {
        Self {
            customer_name: customer_name.into(),
            opening_balance,
            operation_logging,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    value == "true" || value == "1"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("yes"));
    }

    #[test]
    fn test_new_keeps_values() {
        let config = AccountServiceConfig::new("Test User", 100.0, false);
        assert_eq!(config.customer_name, "Test User");
        assert_eq!(config.opening_balance, 100.0);
        assert!(!config.operation_logging);
    }
}
