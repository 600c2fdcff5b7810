use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FlowType;

/// A single movement of money. `amount` is always positive; the direction
/// is carried by `txn_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub txn_type: FlowType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    pub account_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.txn_type == FlowType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.txn_type == FlowType::Expense
    }

    /// Positive for income, negative for expenses.
    pub fn signed_amount(&self) -> Decimal {
        match self.txn_type {
            FlowType::Income => self.amount,
            FlowType::Expense => -self.amount,
        }
    }

    /// Format: "YYYY-MM"
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

/// A transaction as submitted by a form, before validation. The date is
/// kept as text and parsed by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub description: String,
    pub amount: Decimal,
    pub date: String,
    pub txn_type: FlowType,
    pub category_id: Option<String>,
    pub account_id: String,
    pub member_id: Option<String>,
}

impl NewTransaction {
    pub fn new(
        description: impl Into<String>,
        amount: Decimal,
        date: impl Into<String>,
        txn_type: FlowType,
        account_id: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            date: date.into(),
            txn_type,
            category_id: None,
            account_id: account_id.into(),
            member_id: None,
        }
    }

    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    pub fn with_member(mut self, member_id: impl Into<String>) -> Self {
        self.member_id = Some(member_id.into());
        self
    }
}

/// Fields to merge into an existing transaction. `None` leaves a field
/// untouched; for the optional references `Some(None)` clears the link.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionPatch {
    pub description: Option<String>,
    pub amount: Option<Decimal>,
    pub date: Option<String>,
    pub txn_type: Option<FlowType>,
    pub category_id: Option<Option<String>>,
    pub account_id: Option<String>,
    pub member_id: Option<Option<String>>,
}

impl TransactionPatch {
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.amount.is_none()
            && self.date.is_none()
            && self.txn_type.is_none()
            && self.category_id.is_none()
            && self.account_id.is_none()
            && self.member_id.is_none()
    }
}
