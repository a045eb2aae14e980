//! Common types and utilities for the bank workspace
//!
//! This library contains the account domain model, the shared error type and
//! the amount helpers used by the account service and its binary.

pub mod error;
pub mod model;
pub mod decimal;

/// Re-export important types
pub use error::{Error, Result, ErrorExt};
pub use decimal::*;
pub use model::account::Account;
