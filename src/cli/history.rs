//! Audit history command

use crate::error::SplitResult;
use crate::storage::Storage;

/// Print the latest `limit` audit entries, oldest first
pub fn handle_history_command(storage: &Storage, limit: usize) -> SplitResult<()> {
    let Some(logger) = storage.audit_logger() else {
        println!("Audit logging is disabled.");
        return Ok(());
    };

    let entries = logger.read_recent(limit)?;
    if entries.is_empty() {
        println!("No history recorded yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
