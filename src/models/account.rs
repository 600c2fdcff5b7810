use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::StoreError;

pub const DEFAULT_CURRENCY: &str = "BRL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Cash,
    Check,
    Savings,
    Crypto,
    Investment,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Check => "check",
            Self::Savings => "savings",
            Self::Crypto => "crypto",
            Self::Investment => "investment",
        }
    }

    /// Human-readable label for listings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Check => "Checking",
            Self::Savings => "Savings",
            Self::Crypto => "Crypto",
            Self::Investment => "Investment",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "cash" => Some(Self::Cash),
            "check" | "checking" => Some(Self::Check),
            "savings" => Some(Self::Savings),
            "crypto" => Some(Self::Crypto),
            "investment" => Some(Self::Investment),
            _ => None,
        }
    }

    pub fn all() -> &'static [AccountType] {
        &[
            Self::Cash,
            Self::Check,
            Self::Savings,
            Self::Crypto,
            Self::Investment,
        ]
    }
}

impl FromStr for AccountType {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| StoreError::validation("type", format!("unknown account type \"{s}\"")))
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A place money is held. The balance is entered by the user and is not
/// derived from transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub balance: Decimal,
    pub currency: String,
}

impl Account {
    pub fn find_by_id<'a>(accounts: &'a [Account], id: &str) -> Option<&'a Account> {
        accounts.iter().find(|a| a.id == id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    pub name: String,
    pub account_type: AccountType,
    pub balance: Decimal,
    pub currency: String,
}

impl NewAccount {
    pub fn new(name: impl Into<String>, account_type: AccountType) -> Self {
        Self {
            name: name.into(),
            account_type,
            balance: Decimal::ZERO,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }

    pub fn with_balance(mut self, balance: Decimal) -> Self {
        self.balance = balance;
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }
}

/// Fields to replace on an existing account. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountPatch {
    pub name: Option<String>,
    pub account_type: Option<AccountType>,
    pub balance: Option<Decimal>,
    pub currency: Option<String>,
}

impl AccountPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.account_type.is_none()
            && self.balance.is_none()
            && self.currency.is_none()
    }
}
