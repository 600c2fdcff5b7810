#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

// ── Transaction ───────────────────────────────────────────────

fn make_txn(amount: Decimal, txn_type: FlowType) -> Transaction {
    Transaction {
        id: "t1".into(),
        description: "Test".into(),
        amount,
        date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        txn_type,
        category_id: None,
        account_id: "a1".into(),
        member_id: None,
    }
}

#[test]
fn test_income() {
    let txn = make_txn(dec!(100.00), FlowType::Income);
    assert!(txn.is_income());
    assert!(!txn.is_expense());
    assert_eq!(txn.signed_amount(), dec!(100.00));
}

#[test]
fn test_expense_signed_amount() {
    let txn = make_txn(dec!(50.00), FlowType::Expense);
    assert!(txn.is_expense());
    assert_eq!(txn.signed_amount(), dec!(-50.00));
}

#[test]
fn test_month_key_zero_padded() {
    let mut txn = make_txn(dec!(1), FlowType::Income);
    assert_eq!(txn.month_key(), "2024-01");
    txn.date = NaiveDate::from_ymd_opt(2023, 11, 30).unwrap();
    assert_eq!(txn.month_key(), "2023-11");
}

#[test]
fn test_transaction_json_field_names() {
    let mut txn = make_txn(dec!(12.5), FlowType::Expense);
    txn.category_id = Some("c1".into());
    let json = serde_json::to_value(&txn).unwrap();
    assert_eq!(json["type"], "expense");
    assert_eq!(json["date"], "2024-01-15");
    assert_eq!(json["accountId"], "a1");
    assert_eq!(json["categoryId"], "c1");
    assert!(json.get("memberId").is_none());
}

#[test]
fn test_transaction_accepts_numeric_amount() {
    let json = r#"{"id":"1","description":"Uber","amount":25.5,"date":"2024-01-03",
        "type":"expense","accountId":"4"}"#;
    let txn: Transaction = serde_json::from_str(json).unwrap();
    assert_eq!(txn.amount, dec!(25.5));
    assert!(txn.category_id.is_none());
}

#[test]
fn test_transaction_patch_is_empty() {
    assert!(TransactionPatch::default().is_empty());
    let patch = TransactionPatch {
        category_id: Some(None),
        ..Default::default()
    };
    assert!(!patch.is_empty());
}

// ── AccountType ───────────────────────────────────────────────

#[test]
fn test_account_type_parse() {
    assert_eq!(AccountType::parse("cash"), Some(AccountType::Cash));
    assert_eq!(AccountType::parse("CHECK"), Some(AccountType::Check));
    assert_eq!(AccountType::parse("checking"), Some(AccountType::Check));
    assert_eq!(AccountType::parse("savings"), Some(AccountType::Savings));
    assert_eq!(AccountType::parse("crypto"), Some(AccountType::Crypto));
    assert_eq!(AccountType::parse("investment"), Some(AccountType::Investment));
    assert_eq!(AccountType::parse("loan"), None);
}

#[test]
fn test_account_type_from_str_rejects_unknown() {
    let err = "credit".parse::<AccountType>().unwrap_err();
    assert!(matches!(err, crate::StoreError::Validation { field: "type", .. }));
}

#[test]
fn test_account_type_roundtrip() {
    for t in AccountType::all() {
        let s = t.as_str();
        assert_eq!(AccountType::parse(s), Some(*t), "Roundtrip failed for {s}");
    }
}

#[test]
fn test_new_account_defaults() {
    let account = NewAccount::new("Wallet", AccountType::Cash);
    assert_eq!(account.balance, Decimal::ZERO);
    assert_eq!(account.currency, DEFAULT_CURRENCY);
}

#[test]
fn test_account_patch_is_empty() {
    assert!(AccountPatch::default().is_empty());
    let patch = AccountPatch {
        balance: Some(dec!(10)),
        ..Default::default()
    };
    assert!(!patch.is_empty());
}

// ── Category ──────────────────────────────────────────────────

#[test]
fn test_category_lookup() {
    let cats = vec![
        Category {
            id: "1".into(),
            name: "Food".into(),
            category_type: FlowType::Expense,
            parent_id: None,
        },
        Category {
            id: "2".into(),
            name: "Restaurants".into(),
            category_type: FlowType::Expense,
            parent_id: Some("1".into()),
        },
    ];
    assert_eq!(Category::find_by_id(&cats, "1").unwrap().name, "Food");
    assert!(Category::find_by_id(&cats, "2").unwrap().parent_id.is_some());
    assert!(Category::find_by_id(&cats, "9").is_none());
    assert!(cats[0].is_root());
    assert_eq!(format!("{}", cats[1]), "Restaurants");
}

#[test]
fn test_flow_type_parse() {
    assert_eq!(FlowType::parse("Income"), Some(FlowType::Income));
    assert_eq!(FlowType::parse("expense"), Some(FlowType::Expense));
    assert_eq!(FlowType::parse("transfer"), None);
}

// ── FamilyMember ──────────────────────────────────────────────

#[test]
fn test_admin_count() {
    let members = vec![
        FamilyMember {
            id: "1".into(),
            name: "Ana".into(),
            email: "ana@example.com".into(),
            role: Role::Admin,
        },
        FamilyMember {
            id: "2".into(),
            name: "Bruno".into(),
            email: "bruno@example.com".into(),
            role: Role::Member,
        },
    ];
    assert_eq!(FamilyMember::admin_count(&members), 1);
    assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
    assert!("owner".parse::<Role>().is_err());
}

#[test]
fn test_non_empty_id() {
    assert_eq!(non_empty_id(Some("".into())), None);
    assert_eq!(non_empty_id(Some("  ".into())), None);
    assert_eq!(non_empty_id(Some("x".into())), Some("x".into()));
    assert_eq!(non_empty_id(None), None);
}
