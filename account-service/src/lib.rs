//! Account service for applying balance operations to an account

pub mod service;
pub mod operation;
pub mod config;

pub use service::AccountService;
pub use operation::Operation;
pub use config::AccountServiceConfig;
