//! Storage layer for warikan
//!
//! [`Storage`] is the session state: it holds the working copies of the
//! member registry and the expense ledger and writes them through to a
//! [`KeyValueStore`] on every change. Services borrow it mutably for the
//! duration of an operation.

pub mod file_io;
pub mod file_store;
pub mod init;
pub mod kv;

pub use file_store::FileStore;
pub use init::initialize_storage;
pub use kv::{KeyValueStore, MemoryStore, BACKUPS_KEY, EXPENSES_KEY, MEMBERS_KEY};

#[cfg(test)]
pub(crate) use kv::FlakyStore;

use serde::{de::DeserializeOwned, Serialize};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::SplitPaths;
use crate::error::{SplitError, SplitResult};
use crate::models::{Backup, Ledger, MemberRegistry, Snapshot};

/// Working copy of the registry and ledger over a persistent store
pub struct Storage {
    store: Box<dyn KeyValueStore>,
    audit: Option<AuditLogger>,
    members: MemberRegistry,
    expenses: Ledger,
}

impl Storage {
    /// Open file-backed storage under `paths`, with auditing to its audit log
    pub fn new(paths: SplitPaths) -> SplitResult<Self> {
        paths.ensure_directories()?;

        let audit = AuditLogger::new(paths.audit_log());
        Ok(Self::with_store(FileStore::new(paths)).with_audit(Some(audit)))
    }

    /// Create storage over any record store, without auditing
    pub fn with_store(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Box::new(store),
            audit: None,
            members: MemberRegistry::new(),
            expenses: Ledger::new(),
        }
    }

    /// Replace the audit logger (`None` disables auditing)
    pub fn with_audit(mut self, audit: Option<AuditLogger>) -> Self {
        self.audit = audit;
        self
    }

    /// Load the working copies from the store
    pub fn load_all(&mut self) -> SplitResult<()> {
        self.members = self.read_record(MEMBERS_KEY)?;
        self.expenses = self.read_record(EXPENSES_KEY)?;
        Ok(())
    }

    /// Current member registry
    pub fn members(&self) -> &MemberRegistry {
        &self.members
    }

    /// Current expense ledger
    pub fn expenses(&self) -> &Ledger {
        &self.expenses
    }

    /// Deep copy of the registry and ledger
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            expenses: self.expenses.clone(),
            members: self.members.clone(),
        }
    }

    /// Persist a new registry, then make it the working copy
    pub fn set_members(&mut self, members: MemberRegistry) -> SplitResult<()> {
        self.write_record(MEMBERS_KEY, &members)?;
        self.members = members;
        Ok(())
    }

    /// Persist a new ledger, then make it the working copy
    pub fn set_expenses(&mut self, expenses: Ledger) -> SplitResult<()> {
        self.write_record(EXPENSES_KEY, &expenses)?;
        self.expenses = expenses;
        Ok(())
    }

    /// Persist a new registry and ledger together, then make them the working copies
    ///
    /// If the ledger write fails, the registry record is put back to what it
    /// was so the store never holds one new record and one old one.
    pub fn replace_state(&mut self, members: MemberRegistry, expenses: Ledger) -> SplitResult<()> {
        let members_text = encode_record(MEMBERS_KEY, &members)?;
        let expenses_text = encode_record(EXPENSES_KEY, &expenses)?;
        let previous_members = self.store.get(MEMBERS_KEY)?;

        self.store.set(MEMBERS_KEY, members_text)?;
        if let Err(err) = self.store.set(EXPENSES_KEY, expenses_text) {
            let rollback = match previous_members {
                Some(text) => self.store.set(MEMBERS_KEY, text),
                None => self.store.remove(MEMBERS_KEY),
            };
            return match rollback {
                Ok(()) => Err(err),
                Err(rollback_err) => Err(SplitError::Storage(format!(
                    "{}; restoring the member record also failed: {}",
                    err, rollback_err
                ))),
            };
        }

        self.members = members;
        self.expenses = expenses;
        Ok(())
    }

    /// Empty the registry and ledger
    ///
    /// Backups are left untouched.
    pub fn clear_all(&mut self) -> SplitResult<()> {
        self.replace_state(MemberRegistry::new(), Ledger::new())
    }

    /// Read the backup slots
    pub fn load_backups(&self) -> SplitResult<Vec<Backup>> {
        self.read_record(BACKUPS_KEY)
    }

    /// Replace the backup slots
    pub fn save_backups(&mut self, backups: &[Backup]) -> SplitResult<()> {
        self.write_record(BACKUPS_KEY, &backups)
    }

    /// Append an entry to the audit log, if auditing is enabled
    ///
    /// Called after a change has been committed, so a failed log write does
    /// not fail the operation. It is reported on stderr instead.
    pub fn audit(&self, entry: &AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(err) = logger.log(entry) {
                eprintln!("Warning: could not write audit log: {}", err);
            }
        }
    }

    /// The audit logger, if auditing is enabled
    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    fn read_record<T: DeserializeOwned + Default>(&self, key: &str) -> SplitResult<T> {
        match self.store.get(key)? {
            Some(text) if !text.trim().is_empty() => serde_json::from_str(&text)
                .map_err(|e| SplitError::Storage(format!("Failed to parse record '{}': {}", key, e))),
            _ => Ok(T::default()),
        }
    }

    fn write_record<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> SplitResult<()> {
        let text = encode_record(key, value)?;
        self.store.set(key, text)
    }
}

fn encode_record<T: Serialize + ?Sized>(key: &str, value: &T) -> SplitResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| SplitError::Storage(format!("Failed to serialize record '{}': {}", key, e)))
}
