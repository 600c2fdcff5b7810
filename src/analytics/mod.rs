//! Chart-ready rollups computed from a store snapshot. Pure functions: no
//! caching, no side effects. Sums are exact decimal sums of the stored
//! amounts, saturating at the `Decimal` range instead of overflowing;
//! rounding for display is left to the caller.

use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};

use crate::models::{Account, AccountType, Category, FlowType, Scenario, Transaction};

/// Label used when a transaction points at a category that cannot be found.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Upper bound on the years a growth projection covers.
pub const MAX_PROJECTION_YEARS: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyTotal {
    /// Format: "YYYY-MM"
    pub month_key: String,
    pub income: Decimal,
    pub expense: Decimal,
}

impl MonthlyTotal {
    pub fn net(&self) -> Decimal {
        self.income.saturating_sub(self.expense)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    /// `None` for the uncategorized bucket.
    pub category_id: Option<String>,
    pub category_name: String,
    pub total: Decimal,
    pub category_type: FlowType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountBalance {
    pub account_name: String,
    pub balance: Decimal,
    pub account_type: AccountType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyTotal {
    pub currency: String,
    pub balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionPoint {
    pub scenario_id: String,
    pub scenario_name: String,
    pub currency: String,
    /// Years from now; 0 is the current balance.
    pub year: u32,
    /// Rounded to cents.
    pub balance: Decimal,
}

/// Income and expense per calendar month, oldest month first.
pub fn monthly_totals(transactions: &[Transaction]) -> Vec<MonthlyTotal> {
    let mut months: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
    for txn in transactions {
        let (income, expense) = months.entry(txn.month_key()).or_default();
        match txn.txn_type {
            FlowType::Income => *income = income.saturating_add(txn.amount),
            FlowType::Expense => *expense = expense.saturating_add(txn.amount),
        }
    }
    months
        .into_iter()
        .map(|(month_key, (income, expense))| MonthlyTotal {
            month_key,
            income,
            expense,
        })
        .collect()
}

/// Sum of amounts per category, largest first. Transactions without a
/// category are skipped; categories without transactions are omitted.
pub fn category_totals(transactions: &[Transaction], categories: &[Category]) -> Vec<CategoryTotal> {
    let mut totals: HashMap<(Option<&str>, FlowType), Decimal> = HashMap::new();
    for txn in transactions {
        let Some(category_id) = txn.category_id.as_deref() else {
            continue;
        };
        let key = match Category::find_by_id(categories, category_id) {
            Some(c) => (Some(c.id.as_str()), c.category_type),
            None => (None, txn.txn_type),
        };
        let total = totals.entry(key).or_default();
        *total = total.saturating_add(txn.amount);
    }

    let mut result: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|((category_id, category_type), total)| {
            let category_name = category_id
                .and_then(|id| Category::find_by_id(categories, id))
                .map_or_else(|| UNCATEGORIZED.to_string(), |c| c.name.clone());
            CategoryTotal {
                category_id: category_id.map(str::to_string),
                category_name,
                total,
                category_type,
            }
        })
        .collect();
    result.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then_with(|| a.category_name.cmp(&b.category_name))
            .then_with(|| a.category_type.as_str().cmp(b.category_type.as_str()))
    });
    result
}

/// Accounts as chart rows, in collection order.
pub fn account_projection(accounts: &[Account]) -> Vec<AccountBalance> {
    accounts
        .iter()
        .map(|a| AccountBalance {
            account_name: a.name.clone(),
            balance: a.balance,
            account_type: a.account_type,
        })
        .collect()
}

/// Sum of account balances per currency, ordered by currency code. No
/// conversion between currencies.
pub fn total_balance(accounts: &[Account]) -> Vec<CurrencyTotal> {
    let mut totals: BTreeMap<&str, Decimal> = BTreeMap::new();
    for account in accounts {
        let total = totals.entry(account.currency.as_str()).or_default();
        *total = total.saturating_add(account.balance);
    }
    totals
        .into_iter()
        .map(|(currency, balance)| CurrencyTotal {
            currency: currency.to_string(),
            balance,
        })
        .collect()
}

/// Total balance per currency compounded once a year at each scenario's
/// growth rate, one point per year from 0 through the scenario timeframe.
/// A partial final year counts as a whole one. Points are grouped by
/// scenario in collection order, then by currency.
pub fn growth_projection(accounts: &[Account], scenarios: &[Scenario]) -> Vec<ProjectionPoint> {
    let totals = total_balance(accounts);
    let mut points = Vec::new();
    for scenario in scenarios {
        let years = scenario.timeframe.div_ceil(12).min(MAX_PROJECTION_YEARS);
        let factor = Decimal::ONE.saturating_add(scenario.growth_rate);
        for total in &totals {
            let mut balance = total.balance;
            for year in 0..=years {
                if year > 0 {
                    balance = balance.saturating_mul(factor);
                }
                points.push(ProjectionPoint {
                    scenario_id: scenario.id.clone(),
                    scenario_name: scenario.name.clone(),
                    currency: total.currency.clone(),
                    year,
                    balance: balance.round_dp(2),
                });
            }
        }
    }
    points
}

#[cfg(test)]
mod tests;
