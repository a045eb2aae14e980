//! Account model and its guarded balance operations

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decimal::Amount;
use crate::error::{Error, Result};

/// Name of the parameter reported by amount validation errors
pub const AMOUNT_FIELD: &str = "amount";

pub const DEBIT_AMOUNT_EXCEEDS_BALANCE_MESSAGE: &str = "Debit amount exceeds balance";
pub const DEBIT_AMOUNT_LESS_THAN_ZERO_MESSAGE: &str = "Debit amount is less than zero";
pub const CREDIT_AMOUNT_LESS_THAN_ZERO_MESSAGE: &str = "Credit amount is less than zero";
pub const AMOUNT_NOT_FINITE_MESSAGE: &str = "Amount is not a finite number";
pub const CREDIT_AMOUNT_OVERFLOWS_BALANCE_MESSAGE: &str = "Credit amount overflows balance";

/// Account model
///
/// The customer name is fixed at construction. The balance only changes
/// through [`Account::credit`] and [`Account::debit`], and a failed call
/// leaves it untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    customer_name: String,
    balance: Amount,
}

impl Account {
    /// Open an account. The initial balance is taken as given, negative included.
    pub fn new(customer_name: impl Into<String>, balance: Amount) -> Self {
        Self {
            customer_name: customer_name.into(),
            balance,
        }
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Add funds to the balance
    pub fn credit(&mut self, amount: Amount) -> Result<()> {
        ensure_finite(amount)?;
        if amount < 0.0 {
            return Err(Error::out_of_range(AMOUNT_FIELD, CREDIT_AMOUNT_LESS_THAN_ZERO_MESSAGE));
        }
        let balance = self.balance + amount;
        if !balance.is_finite() {
            return Err(Error::out_of_range(AMOUNT_FIELD, CREDIT_AMOUNT_OVERFLOWS_BALANCE_MESSAGE));
        }

        self.balance = balance;
        debug!("Credited {} to {}, balance {}", amount, self.customer_name, self.balance);
        Ok(())
    }

    /// Remove funds from the balance
    pub fn debit(&mut self, amount: Amount) -> Result<()> {
        ensure_finite(amount)?;
        if amount < 0.0 {
            return Err(Error::out_of_range(AMOUNT_FIELD, DEBIT_AMOUNT_LESS_THAN_ZERO_MESSAGE));
        }
        if amount > self.balance {
            return Err(Error::out_of_range(AMOUNT_FIELD, DEBIT_AMOUNT_EXCEEDS_BALANCE_MESSAGE));
        }

        self.balance -= amount;
        debug!("Debited {} from {}, balance {}", amount, self.customer_name, self.balance);
        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2}", self.customer_name, self.balance)
    }
}

fn ensure_finite(amount: Amount) -> Result<()> {
    if amount.is_finite() {
        Ok(())
    } else {
        Err(Error::out_of_range(AMOUNT_FIELD, AMOUNT_NOT_FINITE_MESSAGE))
    }
}
