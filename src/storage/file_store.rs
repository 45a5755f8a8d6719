//! File-backed record store
//!
//! Each record lives in `<data_dir>/<key>.json` and is replaced atomically
//! on every write.

use std::path::PathBuf;

use crate::config::paths::SplitPaths;
use crate::error::SplitResult;

use super::file_io::{read_text, remove_if_exists, write_text_atomic};
use super::kv::KeyValueStore;

/// Record store backed by one JSON file per key
#[derive(Debug, Clone)]
pub struct FileStore {
    paths: SplitPaths,
}

impl FileStore {
    /// Create a store rooted at the data directory of `paths`
    pub fn new(paths: SplitPaths) -> Self {
        Self { paths }
    }

    /// File backing a record
    pub fn record_path(&self, key: &str) -> PathBuf {
        self.paths.record_file(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> SplitResult<Option<String>> {
        read_text(self.record_path(key))
    }

    fn set(&mut self, key: &str, value: String) -> SplitResult<()> {
        write_text_atomic(self.record_path(key), &value)
    }

    fn remove(&mut self, key: &str) -> SplitResult<()> {
        remove_if_exists(self.record_path(key))
    }
}
