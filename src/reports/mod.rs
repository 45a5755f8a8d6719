//! Reports module for warikan
//!
//! Derived views over the registry and ledger. Reports are recomputed from
//! current state on every read and never persisted.

pub mod balance;

pub use balance::{BalanceReport, MemberBalance, Settlement};
