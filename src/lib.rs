//! warikan - shared-expense splitting
//!
//! This library keeps an ordered registry of members and a ledger of
//! expenses, derives each member's balance from the ledger, and proposes a
//! list of transfers that settles the group. Up to two named backups of the
//! registry and ledger can be kept and restored.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (members, expenses, backups, amounts)
//! - `storage`: Key-value record storage and the session working copies
//! - `services`: Business logic layer
//! - `reports`: Balance and settlement computation
//! - `audit`: Audit logging system
//! - `backup`: Backup slot management
//! - `export`: CSV and JSON export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `warikan` binary
//!
//! # Example
//!
//! ```rust
//! use warikan_cli::services::{ExpenseService, MemberService};
//! use warikan_cli::storage::{MemoryStore, Storage};
//!
//! let mut storage = Storage::with_store(MemoryStore::new());
//! MemberService::new(&mut storage).add("Alice")?;
//! MemberService::new(&mut storage).add("Bob")?;
//!
//! let everyone = storage.members().as_slice().to_vec();
//! let mut expenses = ExpenseService::new(&mut storage);
//! expenses.add("Dinner", 100.0, "Alice", &everyone)?;
//!
//! let report = expenses.balances();
//! assert_eq!(report.settlements[0].from, "Bob");
//! # Ok::<(), warikan_cli::SplitError>(())
//! ```

pub mod audit;
pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{SplitError, SplitResult};
