//! Balance operations accepted by the service and the CLI

use std::fmt;
use std::str::FromStr;

use common::decimal::Amount;
use common::error::Error;

/// A single balance operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    Credit(Amount),
    Debit(Amount),
}

impl Operation {
    pub fn amount(&self) -> Amount {
        match self {
            Operation::Credit(amount) | Operation::Debit(amount) => *amount,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Credit(amount) => write!(f, "credit:{}", amount),
            Operation::Debit(amount) => write!(f, "debit:{}", amount),
        }
    }
}

/// Parses `credit:<amount>` or `debit:<amount>`
impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, amount) = s
            .split_once(':')
            .ok_or_else(|| Error::InvalidOperation(format!("expected <kind>:<amount>, got '{}'", s)))?;

        let amount: Amount = amount
            .trim()
            .parse()
            .map_err(|_| Error::InvalidOperation(format!("invalid amount in '{}'", s)))?;

        match kind.trim().to_ascii_lowercase().as_str() {
            "credit" => Ok(Operation::Credit(amount)),
            "debit" => Ok(Operation::Debit(amount)),
            other => Err(Error::InvalidOperation(format!("unknown operation kind '{}'", other))),
        }
    }
}
