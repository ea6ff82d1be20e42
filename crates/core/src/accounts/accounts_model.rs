//! Account domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Type of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Bank,
    Savings,
    MobileWallet,
    CreditCard,
    Investment,
    Loan,
    RealEstate,
    Business,
}

impl AccountType {
    /// Returns the string representation of this account type.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Bank => "bank",
            AccountType::Savings => "savings",
            AccountType::MobileWallet => "mobile_wallet",
            AccountType::CreditCard => "credit_card",
            AccountType::Investment => "investment",
            AccountType::Loan => "loan",
            AccountType::RealEstate => "real_estate",
            AccountType::Business => "business",
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Domain model representing an account in the system.
///
/// The sign of `balance` determines how the account participates in
/// aggregations: positive balances are assets, negative balances are
/// liabilities. Inactive accounts are excluded from every aggregation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub account_type: AccountType,
    /// Signed balance in the account's currency
    pub balance: Decimal,
    pub currency: String,
    pub is_active: bool,
}

impl Account {
    /// True if this account currently holds value (positive balance).
    pub fn is_asset(&self) -> bool {
        self.balance > Decimal::ZERO
    }

    /// True if this account currently owes value (negative balance).
    pub fn is_liability(&self) -> bool {
        self.balance < Decimal::ZERO
    }
}
