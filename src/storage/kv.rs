//! Key-value record store
//!
//! The persistent store holds a handful of named records, each a JSON
//! document. It only owns the raw text; typed encoding happens in
//! [`Storage`](super::Storage).

use std::collections::HashMap;

use crate::error::SplitResult;

/// Record key for the member registry
pub const MEMBERS_KEY: &str = "members";
/// Record key for the expense ledger
pub const EXPENSES_KEY: &str = "expenses";
/// Record key for the backup slots
pub const BACKUPS_KEY: &str = "backups";

/// A store of named text records
pub trait KeyValueStore {
    /// Read a record, `None` if it was never written or has been removed
    fn get(&self, key: &str) -> SplitResult<Option<String>>;

    /// Write a record, replacing any previous value
    fn set(&mut self, key: &str, value: String) -> SplitResult<()>;

    /// Remove a record; removing a missing record is not an error
    fn remove(&mut self, key: &str) -> SplitResult<()>;
}

/// Process-local store, used by tests and embedders that don't want files
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> SplitResult<Option<String>> {
        Ok(self.records.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> SplitResult<()> {
        self.records.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> SplitResult<()> {
        self.records.remove(key);
        Ok(())
    }
}

/// Memory store whose writes to one key can be made to fail
///
/// The failing key is shared through `Rc` so a test can arm it after the
/// store has been handed to [`Storage`](super::Storage).
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct FlakyStore {
    inner: MemoryStore,
    fail_key: std::rc::Rc<std::cell::RefCell<Option<String>>>,
}

#[cfg(test)]
impl FlakyStore {
    pub(crate) fn new() -> (Self, std::rc::Rc<std::cell::RefCell<Option<String>>>) {
        let store = Self::default();
        let handle = store.fail_key.clone();
        (store, handle)
    }
}

#[cfg(test)]
impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> SplitResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: String) -> SplitResult<()> {
        if self.fail_key.borrow().as_deref() == Some(key) {
            return Err(crate::error::SplitError::Io(format!("write to '{}' failed", key)));
        }
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> SplitResult<()> {
        if self.fail_key.borrow().as_deref() == Some(key) {
            return Err(crate::error::SplitError::Io(format!("remove of '{}' failed", key)));
        }
        self.inner.remove(key)
    }
}
