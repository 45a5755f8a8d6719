//! Core data models for warikan
//!
//! This module contains the data structures of the expense-splitting domain:
//! members, expenses, the ledger, and backup snapshots.

pub mod amount;
pub mod backup;
pub mod expense;
pub mod member;

pub use amount::{format_amount, parse_amount, AmountParseError};
pub use backup::{Backup, Snapshot, BACKUP_CAPACITY};
pub use expense::{Expense, ExpenseValidationError, Ledger, DEFAULT_TITLE};
pub use member::{validate_member_name, MemberRegistry, MemberValidationError};
