// This is a metapackage for tests
// Re-export crates as modules

pub use account_service;
pub use common;

pub use account_service::{AccountService, AccountServiceConfig, Operation};
pub use common::{Account, Error, Result};
