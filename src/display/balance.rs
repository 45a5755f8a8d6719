//! Balance display formatting
//!
//! Formats the balance table and the settlement lines for terminal output.

use crate::models::format_amount;
use crate::reports::BalanceReport;

/// Format the per-member table: paid, to receive, to pay
pub fn format_balance_table(report: &BalanceReport, symbol: &str) -> String {
    if report.rows.is_empty() {
        return "No members yet.".to_string();
    }

    let name_width = report
        .rows
        .iter()
        .map(|r| r.member.chars().count())
        .max()
        .unwrap_or(6)
        .max(6);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>12}  {:>12}  {:>12}\n",
        "Member",
        "Paid",
        "Receives",
        "Pays",
        name_width = name_width,
    ));

    output.push_str(&format!(
        "{:-<name_width$}  {:->12}  {:->12}  {:->12}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for row in &report.rows {
        output.push_str(&format!(
            "{:<name_width$}  {:>12}  {:>12}  {:>12}\n",
            row.member,
            format_amount(row.total_paid, symbol),
            format_amount(row.receive(), symbol),
            format_amount(row.pay(), symbol),
            name_width = name_width,
        ));
    }

    output
}

/// Format the settlement transfers, one per line
pub fn format_settlements(report: &BalanceReport, symbol: &str) -> String {
    if report.settlements.is_empty() {
        return "Everyone is settled up.".to_string();
    }

    let mut output = String::new();
    for settlement in &report.settlements {
        output.push_str(&format!(
            "{} pays {} {}\n",
            settlement.from,
            settlement.to,
            format_amount(settlement.amount, symbol)
        ));
    }
    output
}
