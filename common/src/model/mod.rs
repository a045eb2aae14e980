//! Domain models for the bank workspace

pub mod account;
