//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod backup;
pub mod expense;
pub mod export;
pub mod history;
pub mod member;

pub use backup::{handle_backup_command, BackupCommands};
pub use expense::{handle_expense_command, handle_reset_command, ExpenseCommands};
pub use export::{handle_export_command, ExportFormat};
pub use history::handle_history_command;
pub use member::{handle_member_command, MemberCommands};

use crate::config::settings::Settings;
use crate::display::{format_balance_table, format_settlements};
use crate::reports::BalanceReport;
use crate::storage::Storage;

/// Print the balance table followed by the settlement lines
pub fn print_balances(storage: &Storage, settings: &Settings) {
    let report = BalanceReport::generate(storage.members(), storage.expenses());
    let symbol = settings.currency_symbol.as_str();

    println!("{}", format_balance_table(&report, symbol).trim_end());
    println!();
    println!("{}", format_settlements(&report, symbol).trim_end());
}
