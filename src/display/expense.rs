//! Expense and backup display formatting

use crate::models::{format_amount, Backup, Expense};

/// Format a list of expenses with their ledger positions
///
/// `hidden` is the number of older expenses left out of the list.
pub fn format_expense_list(expenses: &[(usize, Expense)], hidden: usize, symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let mut output = String::new();
    for (index, expense) in expenses {
        output.push_str(&format!(
            "[{}] {} - {} (payer: {}, members: {})\n",
            index,
            expense.title,
            format_amount(expense.amount, symbol),
            expense.payer,
            expense.participants.join(", ")
        ));
    }

    if hidden > 0 {
        output.push_str(&format!(
            "... {} older expense(s) hidden, use --all to show them\n",
            hidden
        ));
    }

    output
}

/// Format the backup slots
pub fn format_backup_list(backups: &[Backup]) -> String {
    if backups.is_empty() {
        return "No backups.".to_string();
    }

    let mut output = String::new();
    for (index, backup) in backups.iter().enumerate() {
        let created = backup
            .created_at
            .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
            .unwrap_or_else(|| "unknown date".to_string());

        output.push_str(&format!(
            "[{}] {} ({} member(s), {} expense(s), {})\n",
            index,
            backup.name,
            backup.member_count(),
            backup.expense_count(),
            created
        ));
    }
    output
}
