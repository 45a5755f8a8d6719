//! Backup restoration for warikan
//!
//! Replaces the live registry and ledger with a backup's snapshot.

use chrono::{DateTime, Utc};

use crate::audit::AuditEntry;
use crate::error::{SplitError, SplitResult};
use crate::storage::Storage;

/// Handles restoring from backups
pub struct RestoreManager<'a> {
    storage: &'a mut Storage,
}

impl<'a> RestoreManager<'a> {
    /// Create a new RestoreManager
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Restore the backup in slot `index`
    ///
    /// This overwrites every member and expense. Both records are replaced
    /// together; on a failed write the current state is kept.
    pub fn restore_backup(&mut self, index: usize) -> SplitResult<RestoreResult> {
        let backup = self
            .storage
            .load_backups()?
            .into_iter()
            .nth(index)
            .ok_or_else(|| SplitError::backup_not_found(index))?;

        let before = self.storage.snapshot();

        self.storage
            .replace_state(backup.data.members.clone(), backup.data.expenses.clone())?;

        self.storage.audit(&AuditEntry::restore(
            index,
            backup.name.clone(),
            &before,
            &backup.data,
        ));

        Ok(RestoreResult {
            backup_name: backup.name,
            backup_date: backup.created_at,
            members_restored: self.storage.members().len(),
            expenses_restored: self.storage.expenses().len(),
        })
    }
}

/// Result of a restore operation
#[derive(Debug, Clone, PartialEq)]
pub struct RestoreResult {
    /// Name of the restored backup
    pub backup_name: String,
    /// When the backup was taken, if recorded
    pub backup_date: Option<DateTime<Utc>>,
    /// Number of members now registered
    pub members_restored: usize,
    /// Number of expenses now in the ledger
    pub expenses_restored: usize,
}

impl RestoreResult {
    /// Get a summary of what was restored
    pub fn summary(&self) -> String {
        format!(
            "Restored '{}': {} member(s), {} expense(s)",
            self.backup_name, self.members_restored, self.expenses_restored
        )
    }
}
