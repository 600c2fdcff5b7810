#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn txn(id: &str, amount: Decimal, date: &str, txn_type: FlowType, category: Option<&str>) -> Transaction {
    Transaction {
        id: id.into(),
        description: format!("txn {id}"),
        amount,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        txn_type,
        category_id: category.map(str::to_string),
        account_id: "a1".into(),
        member_id: None,
    }
}

fn category(id: &str, name: &str, category_type: FlowType) -> Category {
    Category {
        id: id.into(),
        name: name.into(),
        category_type,
        parent_id: None,
    }
}

fn account(name: &str, balance: Decimal, currency: &str) -> Account {
    Account {
        id: name.to_lowercase(),
        name: name.into(),
        account_type: AccountType::Check,
        balance,
        currency: currency.into(),
    }
}

// ── monthly_totals ────────────────────────────────────────────

#[test]
fn test_monthly_totals_empty() {
    assert!(monthly_totals(&[]).is_empty());
}

#[test]
fn test_monthly_totals_single_month() {
    let txns = vec![
        txn("1", dec!(500), "2024-01-01", FlowType::Income, None),
        txn("2", dec!(100), "2024-01-15", FlowType::Expense, None),
        txn("3", dec!(20.50), "2024-01-31", FlowType::Expense, None),
        txn("4", dec!(0.25), "2024-01-31", FlowType::Income, None),
    ];
    let totals = monthly_totals(&txns);
    assert_eq!(
        totals,
        vec![MonthlyTotal {
            month_key: "2024-01".into(),
            income: dec!(500.25),
            expense: dec!(120.50),
        }]
    );
    assert_eq!(totals[0].net(), dec!(379.75));
}

#[test]
fn test_monthly_totals_ordered_ascending_across_years() {
    let txns = vec![
        txn("1", dec!(1), "2024-02-01", FlowType::Income, None),
        txn("2", dec!(2), "2023-12-31", FlowType::Expense, None),
        txn("3", dec!(3), "2024-10-05", FlowType::Income, None),
        txn("4", dec!(4), "2024-02-20", FlowType::Expense, None),
    ];
    let totals = monthly_totals(&txns);
    let keys: Vec<&str> = totals.iter().map(|t| t.month_key.as_str()).collect();
    assert_eq!(keys, vec!["2023-12", "2024-02", "2024-10"]);

    assert_eq!(totals[0].income, Decimal::ZERO);
    assert_eq!(totals[0].expense, dec!(2));
    assert_eq!(totals[1].income, dec!(1));
    assert_eq!(totals[1].expense, dec!(4));
}

#[test]
fn test_monthly_totals_exact_decimal_sum() {
    let txns: Vec<Transaction> = (0..10)
        .map(|i| txn(&i.to_string(), dec!(0.1), "2024-03-01", FlowType::Expense, None))
        .collect();
    assert_eq!(monthly_totals(&txns)[0].expense, dec!(1.0));
}

// ── category_totals ───────────────────────────────────────────

#[test]
fn test_category_totals_groups_and_omits_empty() {
    let cats = vec![
        category("food", "Food", FlowType::Expense),
        category("salary", "Salary", FlowType::Income),
        category("health", "Health", FlowType::Expense),
    ];
    let txns = vec![
        txn("1", dec!(30), "2024-01-02", FlowType::Expense, Some("food")),
        txn("2", dec!(12.5), "2024-02-02", FlowType::Expense, Some("food")),
        txn("3", dec!(5000), "2024-01-01", FlowType::Income, Some("salary")),
        txn("4", dec!(99), "2024-01-01", FlowType::Expense, None),
    ];
    let totals = category_totals(&txns, &cats);

    assert_eq!(totals.len(), 2);
    assert_eq!(totals[0].category_name, "Salary");
    assert_eq!(totals[0].total, dec!(5000));
    assert_eq!(totals[0].category_type, FlowType::Income);
    assert_eq!(totals[1].category_name, "Food");
    assert_eq!(totals[1].category_id.as_deref(), Some("food"));
    assert_eq!(totals[1].total, dec!(42.5));
    assert!(!totals.iter().any(|t| t.category_name == "Health"));
}

#[test]
fn test_category_totals_unresolved_falls_back() {
    let txns = vec![
        txn("1", dec!(7), "2024-01-02", FlowType::Expense, Some("gone")),
        txn("2", dec!(3), "2024-01-03", FlowType::Expense, Some("also-gone")),
    ];
    let totals = category_totals(&txns, &[]);
    assert_eq!(totals.len(), 1);
    assert_eq!(totals[0].category_name, UNCATEGORIZED);
    assert_eq!(totals[0].category_id, None);
    assert_eq!(totals[0].total, dec!(10));
}

#[test]
fn test_category_totals_ties_ordered_by_name() {
    let cats = vec![
        category("b", "Bravo", FlowType::Expense),
        category("a", "Alpha", FlowType::Expense),
    ];
    let txns = vec![
        txn("1", dec!(10), "2024-01-02", FlowType::Expense, Some("b")),
        txn("2", dec!(10), "2024-01-02", FlowType::Expense, Some("a")),
    ];
    let names: Vec<String> = category_totals(&txns, &cats)
        .into_iter()
        .map(|t| t.category_name)
        .collect();
    assert_eq!(names, vec!["Alpha", "Bravo"]);
}

// ── account_projection / total_balance ────────────────────────

#[test]
fn test_account_projection_keeps_order() {
    let accounts = vec![
        account("Checking", dec!(1000), "BRL"),
        account("Wallet", dec!(-20), "BRL"),
    ];
    let rows = account_projection(&accounts);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].account_name, "Checking");
    assert_eq!(rows[0].balance, dec!(1000));
    assert_eq!(rows[0].account_type, AccountType::Check);
    assert_eq!(rows[1].balance, dec!(-20));
}

#[test]
fn test_total_balance_per_currency() {
    let accounts = vec![
        account("A", dec!(100), "USD"),
        account("B", dec!(50.5), "BRL"),
        account("C", dec!(25), "USD"),
    ];
    let totals = total_balance(&accounts);
    assert_eq!(
        totals,
        vec![
            CurrencyTotal {
                currency: "BRL".into(),
                balance: dec!(50.5),
            },
            CurrencyTotal {
                currency: "USD".into(),
                balance: dec!(125),
            },
        ]
    );
    assert!(total_balance(&[]).is_empty());
}

#[test]
fn test_sums_saturate_at_decimal_range() {
    let txns = vec![
        txn("1", Decimal::MAX, "2024-01-01", FlowType::Income, Some("x")),
        txn("2", Decimal::MAX, "2024-01-02", FlowType::Income, Some("x")),
    ];
    let months = monthly_totals(&txns);
    assert_eq!(months[0].income, Decimal::MAX);
    assert_eq!(months[0].net(), Decimal::MAX);
    assert_eq!(category_totals(&txns, &[])[0].total, Decimal::MAX);

    let accounts = vec![
        account("A", Decimal::MIN, "BRL"),
        account("B", Decimal::MIN, "BRL"),
    ];
    assert_eq!(total_balance(&accounts)[0].balance, Decimal::MIN);
}

// ── growth_projection ─────────────────────────────────────────

fn scenario(id: &str, growth_rate: Decimal, timeframe: u32) -> Scenario {
    Scenario {
        id: id.into(),
        name: format!("scenario {id}"),
        description: String::new(),
        growth_rate,
        timeframe,
    }
}

#[test]
fn test_growth_projection_compounds_yearly() {
    let accounts = vec![
        account("Checking", dec!(20000), "BRL"),
        account("Savings", dec!(6350), "BRL"),
    ];
    let points = growth_projection(&accounts, &[scenario("s", dec!(0.05), 60)]);
    let balances: Vec<Decimal> = points.iter().map(|p| p.balance).collect();
    assert_eq!(
        balances,
        vec![
            dec!(26350),
            dec!(27667.50),
            dec!(29050.88),
            dec!(30503.42),
            dec!(32028.59),
            dec!(33630.02),
        ]
    );
    let years: Vec<u32> = points.iter().map(|p| p.year).collect();
    assert_eq!(years, vec![0, 1, 2, 3, 4, 5]);
    assert!(points.iter().all(|p| p.scenario_id == "s" && p.currency == "BRL"));
}

#[test]
fn test_growth_projection_per_scenario_and_currency() {
    let accounts = vec![
        account("A", dec!(100), "USD"),
        account("B", dec!(1000), "BRL"),
    ];
    let scenarios = vec![scenario("up", dec!(0.10), 12), scenario("down", dec!(-0.5), 13)];
    let points = growth_projection(&accounts, &scenarios);

    let rows: Vec<(&str, &str, u32, Decimal)> = points
        .iter()
        .map(|p| (p.scenario_id.as_str(), p.currency.as_str(), p.year, p.balance))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("up", "BRL", 0, dec!(1000)),
            ("up", "BRL", 1, dec!(1100)),
            ("up", "USD", 0, dec!(100)),
            ("up", "USD", 1, dec!(110)),
            // 13 months rounds up to two years.
            ("down", "BRL", 0, dec!(1000)),
            ("down", "BRL", 1, dec!(500)),
            ("down", "BRL", 2, dec!(250)),
            ("down", "USD", 0, dec!(100)),
            ("down", "USD", 1, dec!(50)),
            ("down", "USD", 2, dec!(25)),
        ]
    );
}

#[test]
fn test_growth_projection_edges() {
    assert!(growth_projection(&[], &[scenario("s", dec!(0.05), 60)]).is_empty());
    assert!(growth_projection(&[account("A", dec!(1), "BRL")], &[]).is_empty());

    let points = growth_projection(
        &[account("A", dec!(1), "BRL")],
        &[scenario("s", dec!(0), u32::MAX)],
    );
    assert_eq!(points.len(), MAX_PROJECTION_YEARS as usize + 1);
    assert!(points.iter().all(|p| p.balance == dec!(1)));
}
