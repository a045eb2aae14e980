//! Account service implementation

use common::decimal::Amount;
use common::error::{ErrorExt, Result};
use common::model::account::Account;
use tracing::{debug, info, warn};

use crate::config::AccountServiceConfig;
use crate::operation::Operation;

/// Account service applying balance operations to a single account
pub struct AccountService {
    account: Account,
    operation_logging: bool,
}

impl AccountService {
    /// Create a new account service around an existing account
    pub fn new(account: Account) -> Self {
        Self {
            account,
            operation_logging: true,
        }
    }

    /// Open an account from a configuration
    pub fn with_config(config: &AccountServiceConfig) -> Self {
        info!(
            "Opening account for {} with balance {}",
            config.customer_name, config.opening_balance
        );
        Self {
            account: Account::new(config.customer_name.clone(), config.opening_balance),
            operation_logging: config.operation_logging,
        }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn into_account(self) -> Account {
        self.account
    }

    /// Credit funds and return the new balance
    pub fn credit(&mut self, amount: Amount) -> Result<Amount> {
        self.apply(&Operation::Credit(amount))
    }

    /// Debit funds and return the new balance
    pub fn debit(&mut self, amount: Amount) -> Result<Amount> {
        self.apply(&Operation::Debit(amount))
    }

    /// Apply a single operation and return the new balance
    pub fn apply(&mut self, operation: &Operation) -> Result<Amount> {
        let result = match operation {
            Operation::Credit(amount) => self.account.credit(*amount),
            Operation::Debit(amount) => self.account.debit(*amount),
        };

        match result {
            Ok(()) => {
                if self.operation_logging {
                    info!(
                        "Applied {} to account of {}, balance {}",
                        operation,
                        self.account.customer_name(),
                        self.account.balance()
                    );
                }
                Ok(self.account.balance())
            }
            Err(e) => {
                warn!(
                    "Rejected {} for account of {}: {}",
                    operation,
                    self.account.customer_name(),
                    e
                );
                Err(e)
            }
        }
    }

    /// Apply operations in order, stopping at the first rejected one.
    ///
    /// Operations before the rejected one stay applied.
    pub fn apply_all(&mut self, operations: &[Operation]) -> Result<Amount> {
        debug!("Applying {} operations", operations.len());
        for (index, operation) in operations.iter().enumerate() {
            self.apply(operation)
                .with_context(|| format!("Operation #{} ({})", index + 1, operation))?;
        }
        Ok(self.account.balance())
    }

    /// Serialize the current account state as pretty-printed JSON
    pub fn snapshot_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.account)?)
    }
}
