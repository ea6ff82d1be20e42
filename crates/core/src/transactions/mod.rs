//! Transactions module - domain models for money movements.

mod transactions_model;

pub use transactions_model::{Transaction, TransactionKind};
