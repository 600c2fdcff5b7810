mod account;
mod category;
mod family_member;
mod scenario;
mod transaction;

pub use account::{Account, AccountPatch, AccountType, NewAccount, DEFAULT_CURRENCY};
pub use category::{Category, FlowType, NewCategory};
pub use family_member::{FamilyMember, NewFamilyMember, Role};
pub use scenario::{NewScenario, Scenario};
pub use transaction::{NewTransaction, Transaction, TransactionPatch};

/// Treat `Some("")` (an unselected form field) the same as `None`.
pub(crate) fn non_empty_id(id: Option<String>) -> Option<String> {
    id.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests;
