//! Storage initialization
//!
//! Handles first-run setup: directories and empty records.

use crate::config::paths::SplitPaths;
use crate::error::SplitError;

use super::file_io::write_text_atomic;
use super::kv::{BACKUPS_KEY, EXPENSES_KEY, MEMBERS_KEY};

/// Initialize storage for a fresh installation
///
/// Creates the data directory and writes an empty array for every record
/// that doesn't exist yet. Existing records are never overwritten.
pub fn initialize_storage(paths: &SplitPaths) -> Result<(), SplitError> {
    paths.ensure_directories()?;

    for key in [MEMBERS_KEY, EXPENSES_KEY, BACKUPS_KEY] {
        let path = paths.record_file(key);
        if !path.exists() {
            write_text_atomic(&path, "[]")?;
        }
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &SplitPaths) -> bool {
    [MEMBERS_KEY, EXPENSES_KEY, BACKUPS_KEY]
        .iter()
        .any(|key| !paths.record_file(key).exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_storage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SplitPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(needs_initialization(&paths));

        initialize_storage(&paths).unwrap();

        assert!(!needs_initialization(&paths));
        assert!(paths.record_file(MEMBERS_KEY).exists());
        assert!(paths.record_file(BACKUPS_KEY).exists());
    }

    #[test]
    fn test_doesnt_overwrite_existing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SplitPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();
        write_text_atomic(paths.record_file(MEMBERS_KEY), r#"["Alice"]"#).unwrap();

        initialize_storage(&paths).unwrap();

        let content = std::fs::read_to_string(paths.record_file(MEMBERS_KEY)).unwrap();
        assert_eq!(content, r#"["Alice"]"#);
    }
}
