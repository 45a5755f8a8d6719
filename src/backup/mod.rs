//! Backup system for warikan
//!
//! Named snapshots of the member registry and expense ledger, kept in a
//! two-slot rotating list.
//!
//! # Architecture
//!
//! - `BackupManager`: creates, lists and deletes backups and enforces the
//!   capacity, evicting the oldest slot after confirmation
//! - `RestoreManager`: replaces the live state with a backup
//!
//! # Backup Format
//!
//! The `backups` record is a JSON array of
//! `{name, data: {expenses, members}, created_at}` objects, oldest first.
//!
//! # Example
//!
//! ```rust,ignore
//! use warikan_cli::backup::{BackupManager, RestoreManager};
//! use warikan_cli::services::Preapproved;
//!
//! BackupManager::new(&mut storage).create_backup("before trip", &Preapproved(true))?;
//!
//! // Later
//! let result = RestoreManager::new(&mut storage).restore_backup(0)?;
//! println!("{}", result.summary());
//! ```

mod manager;
mod restore;

pub use manager::{BackupManager, CreateOutcome};
pub use restore::{RestoreManager, RestoreResult};
