//! Backup manager for warikan
//!
//! Keeps at most [`BACKUP_CAPACITY`] named snapshots of the registry and
//! ledger in the `backups` record. A new backup beyond capacity evicts the
//! oldest one, but only after confirmation.

use crate::audit::{AuditEntry, EntityType};
use crate::error::{SplitError, SplitResult};
use crate::models::{Backup, BACKUP_CAPACITY};
use crate::services::Confirm;
use crate::storage::Storage;

/// Result of [`BackupManager::create_backup`]
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    /// The backup was stored; `evicted` holds the slots that made room for it
    Created { backup: Backup, evicted: Vec<Backup> },
    /// Eviction was declined and nothing changed
    Declined,
}

/// Manages backup creation and deletion
pub struct BackupManager<'a> {
    storage: &'a mut Storage,
}

impl<'a> BackupManager<'a> {
    /// Create a new BackupManager
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Snapshot the current registry and ledger under `name`
    pub fn create_backup(&mut self, name: &str, confirm: &dyn Confirm) -> SplitResult<CreateOutcome> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SplitError::Validation("Backup name cannot be empty".into()));
        }

        let mut backups = self.storage.load_backups()?;

        let mut evicted = Vec::new();
        if backups.len() >= BACKUP_CAPACITY {
            let prompt = format!(
                "There are already {} backups. Overwrite the oldest one?",
                backups.len()
            );
            if !confirm.confirm(&prompt) {
                return Ok(CreateOutcome::Declined);
            }
            let excess = backups.len() + 1 - BACKUP_CAPACITY;
            evicted = backups.drain(..excess).collect();
        }

        let backup = Backup::capture(name, self.storage.members(), self.storage.expenses());
        backups.push(backup.clone());
        self.storage.save_backups(&backups)?;

        for old in &evicted {
            self.storage.audit(&AuditEntry::delete(
                EntityType::Backup,
                "0",
                Some(old.name.clone()),
                old,
            ));
        }
        self.storage.audit(&AuditEntry::create(
            EntityType::Backup,
            (backups.len() - 1).to_string(),
            Some(backup.name.clone()),
            &backup,
        ));

        Ok(CreateOutcome::Created { backup, evicted })
    }

    /// All backups, oldest first
    pub fn list_backups(&self) -> SplitResult<Vec<Backup>> {
        self.storage.load_backups()
    }

    /// Delete the backup in a slot
    pub fn delete_backup(&mut self, index: usize) -> SplitResult<Backup> {
        let mut backups = self.storage.load_backups()?;
        if index >= backups.len() {
            return Err(SplitError::backup_not_found(index));
        }

        let removed = backups.remove(index);
        self.storage.save_backups(&backups)?;

        self.storage.audit(&AuditEntry::delete(
            EntityType::Backup,
            index.to_string(),
            Some(removed.name.clone()),
            &removed,
        ));

        Ok(removed)
    }
}
