//! Fixed default records installed for any collection that is missing or
//! unreadable on first load. Ids are stable so the seeded transactions
//! resolve against the seeded accounts, categories and members.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{
    Account, AccountType, Category, FamilyMember, FlowType, Role, Scenario, Transaction,
    DEFAULT_CURRENCY,
};

pub(crate) fn accounts() -> Vec<Account> {
    let account = |id: &str, name: &str, account_type, balance: i64| Account {
        id: id.into(),
        name: name.into(),
        account_type,
        balance: Decimal::new(balance, 2),
        currency: DEFAULT_CURRENCY.into(),
    };
    vec![
        account("1", "Checking Account", AccountType::Check, 2_500_00),
        account("2", "Savings", AccountType::Savings, 15_000_00),
        account("3", "Bitcoin Wallet", AccountType::Crypto, 8_500_00),
        account("4", "Cash", AccountType::Cash, 350_00),
    ]
}

pub(crate) fn categories() -> Vec<Category> {
    let category = |id: &str, name: &str, category_type| Category {
        id: id.into(),
        name: name.into(),
        category_type,
        parent_id: None,
    };
    vec![
        category("1", "Food", FlowType::Expense),
        category("2", "Transport", FlowType::Expense),
        category("3", "Salary", FlowType::Income),
        category("4", "Freelance", FlowType::Income),
        category("5", "Health", FlowType::Expense),
        category("6", "Entertainment", FlowType::Expense),
    ]
}

pub(crate) fn family_members() -> Vec<FamilyMember> {
    vec![
        FamilyMember {
            id: "1".into(),
            name: "João Silva".into(),
            email: "joao@email.com".into(),
            role: Role::Admin,
        },
        FamilyMember {
            id: "2".into(),
            name: "Maria Silva".into(),
            email: "maria@email.com".into(),
            role: Role::Member,
        },
    ]
}

pub(crate) fn transactions() -> Vec<Transaction> {
    let txn = |id: &str,
               description: &str,
               amount: i64,
               (y, m, d): (i32, u32, u32),
               txn_type,
               category: &str,
               account: &str,
               member: &str| Transaction {
        id: id.into(),
        description: description.into(),
        amount: Decimal::new(amount, 2),
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        txn_type,
        category_id: Some(category.into()),
        account_id: account.into(),
        member_id: Some(member.into()),
    };
    vec![
        txn("1", "January Salary", 5_000_00, (2024, 1, 1), FlowType::Income, "3", "1", "1"),
        txn("2", "Supermarket", 350_00, (2024, 1, 2), FlowType::Expense, "1", "1", "1"),
        txn("3", "Uber", 25_00, (2024, 1, 3), FlowType::Expense, "2", "4", "2"),
    ]
}

pub(crate) fn scenarios() -> Vec<Scenario> {
    let scenario = |id: &str, name: &str, description: &str, rate: i64| Scenario {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        growth_rate: Decimal::new(rate, 2),
        timeframe: 60,
    };
    vec![
        scenario("1", "Conservative", "Low, steady growth", 5),
        scenario("2", "Moderate", "Medium growth with some risk", 8),
        scenario("3", "Aggressive", "High growth with higher risk", 12),
    ]
}
