//! Accounts module - domain models for user accounts.

mod accounts_model;

pub use accounts_model::{Account, AccountType};
