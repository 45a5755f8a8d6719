//! Display formatting for terminal output
//!
//! Provides utilities for formatting balances, settlements, expenses and
//! backups for terminal display.

pub mod balance;
pub mod expense;

pub use balance::{format_balance_table, format_settlements};
pub use expense::{format_backup_list, format_expense_list};
