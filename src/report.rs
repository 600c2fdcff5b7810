//! Plain-text rendering of the dashboard summary.

use rust_decimal::Decimal;
use std::fmt::{self, Write};

use crate::analytics::{self, UNCATEGORIZED};
use crate::store::Snapshot;

/// Format a decimal amount with thousand separators and 2 decimal places.
/// e.g. `1234567.89` → `"1,234,567.89"`
pub fn format_amount(val: Decimal) -> String {
    let abs = val.abs().round_dp(2);
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if val < Decimal::ZERO {
        format!("-{with_commas}.{dec_part}")
    } else {
        format!("{with_commas}.{dec_part}")
    }
}

/// Accounts, per-currency totals, monthly flow, category totals and the
/// final year of each growth projection.
pub fn summary(snapshot: &Snapshot) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let rule = "─".repeat(48);

    writeln!(out, "Accounts")?;
    writeln!(out, "{rule}")?;
    if snapshot.accounts.is_empty() {
        writeln!(out, "  No accounts")?;
    }
    for account in &snapshot.accounts {
        writeln!(
            out,
            "  {:<24} {:<11} {} {:>12}",
            account.name,
            account.account_type.label(),
            account.currency,
            format_amount(account.balance),
        )?;
    }
    for total in analytics::total_balance(&snapshot.accounts) {
        writeln!(
            out,
            "  {:<24} {:<11} {} {:>12}",
            "Total",
            "",
            total.currency,
            format_amount(total.balance)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{:<10} {:>12} {:>12} {:>12}", "Month", "Income", "Expense", "Net")?;
    writeln!(out, "{rule}")?;
    for month in snapshot.monthly_totals() {
        writeln!(
            out,
            "{:<10} {:>12} {:>12} {:>12}",
            month.month_key,
            format_amount(month.income),
            format_amount(month.expense),
            format_amount(month.net()),
        )?;
    }

    let categories = snapshot.category_totals();
    if !categories.is_empty() {
        writeln!(out)?;
        writeln!(out, "By Category")?;
        writeln!(out, "{rule}")?;
        for total in &categories {
            let marker = if total.category_name == UNCATEGORIZED { "*" } else { "" };
            writeln!(
                out,
                "  {:<24} {:<8} {:>12}{marker}",
                total.category_name,
                total.category_type.as_str(),
                format_amount(total.total),
            )?;
        }
    }

    let projection = snapshot.growth_projection();
    if !projection.is_empty() {
        writeln!(out)?;
        writeln!(out, "Growth Projection")?;
        writeln!(out, "{rule}")?;
        // Last point of each scenario and currency series.
        for (i, point) in projection.iter().enumerate() {
            if !projection.get(i + 1).is_none_or(|next| next.year == 0) {
                continue;
            }
            writeln!(
                out,
                "  {:<24} {:>2}y {} {:>12}",
                point.scenario_name,
                point.year,
                point.currency,
                format_amount(point.balance),
            )?;
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(dec!(0)), "0.00");
        assert_eq!(format_amount(dec!(1234567.891)), "1,234,567.89");
        assert_eq!(format_amount(dec!(-20)), "-20.00");
        assert_eq!(format_amount(dec!(999.5)), "999.50");
    }

    #[test]
    fn test_summary_lists_seeded_data() {
        let store = crate::Store::load(crate::MemoryStorage::new()).unwrap();
        let text = summary(&store.snapshot()).unwrap();
        assert!(text.contains("Checking Account"));
        assert!(text.contains("26,350.00"));
        assert!(text.contains("2024-01"));
        assert!(text.contains("5,000.00"));
        assert!(text.contains("Salary"));
        assert!(text.contains("Growth Projection"));
        assert!(text.contains("33,630.02"));
        assert!(text.contains("38,716.79"));
        assert!(text.contains("46,437.70"));
    }
}
