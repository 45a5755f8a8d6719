//! Member service
//!
//! Registers members of the group.

use crate::audit::{AuditEntry, EntityType};
use crate::error::{SplitError, SplitResult};
use crate::models::{validate_member_name, MemberRegistry};
use crate::storage::Storage;

/// Service for member management
pub struct MemberService<'a> {
    storage: &'a mut Storage,
}

impl<'a> MemberService<'a> {
    /// Create a new member service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Register a new member
    ///
    /// The name is trimmed. Fails if it is empty or already registered.
    pub fn add(&mut self, name: &str) -> SplitResult<String> {
        validate_member_name(name).map_err(|e| SplitError::Validation(e.to_string()))?;
        let name = MemberRegistry::normalize_name(name).to_string();

        if self.storage.members().contains(&name) {
            return Err(SplitError::Duplicate {
                entity_type: "Member",
                identifier: name,
            });
        }

        let mut members = self.storage.members().clone();
        members.insert(name.clone());
        self.storage.set_members(members)?;

        self.storage
            .audit(&AuditEntry::create(EntityType::Member, name.clone(), None, &name));

        Ok(name)
    }

    /// All members in insertion order
    pub fn list(&self) -> Vec<String> {
        self.storage.members().as_slice().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditLogger;
    use crate::storage::MemoryStore;
    use tempfile::TempDir;

    fn create_test_storage() -> Storage {
        Storage::with_store(MemoryStore::new())
    }

    #[test]
    fn test_add_members_in_order() {
        let mut storage = create_test_storage();
        let mut service = MemberService::new(&mut storage);

        for name in ["Alice", "Bob", "Carol"] {
            service.add(name).unwrap();
        }

        assert_eq!(service.list(), vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_add_trims_name() {
        let mut storage = create_test_storage();
        let mut service = MemberService::new(&mut storage);

        assert_eq!(service.add("  Alice ").unwrap(), "Alice");
        assert!(service.add("Alice").unwrap_err().is_duplicate());
    }

    #[test]
    fn test_rejects_empty_and_duplicate() {
        let mut storage = create_test_storage();
        let mut service = MemberService::new(&mut storage);
        service.add("Alice").unwrap();

        assert!(service.add("").unwrap_err().is_validation());
        assert!(service.add("   ").unwrap_err().is_validation());
        assert!(service.add("Alice").unwrap_err().is_duplicate());

        assert_eq!(service.list(), vec!["Alice"]);
    }

    #[test]
    fn test_add_is_persisted() {
        let mut storage = create_test_storage();
        MemberService::new(&mut storage).add("Alice").unwrap();

        // Reloading from the store gives back the same registry
        storage.load_all().unwrap();
        assert!(storage.members().contains("Alice"));
    }

    #[test]
    fn test_add_succeeds_when_audit_log_is_unwritable() {
        let temp_dir = TempDir::new().unwrap();
        // The log path is a directory, so every audit write fails
        let logger = AuditLogger::new(temp_dir.path().to_path_buf());
        let mut storage = create_test_storage().with_audit(Some(logger));

        assert_eq!(MemberService::new(&mut storage).add("Alice").unwrap(), "Alice");

        storage.load_all().unwrap();
        assert!(storage.members().contains("Alice"));
    }
}
