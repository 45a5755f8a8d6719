//! Backup slot model
//!
//! A backup is a named, deep copy of the member registry and the expense
//! ledger. At most [`BACKUP_CAPACITY`] backups are retained.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::expense::Ledger;
use super::member::MemberRegistry;

/// Number of backup slots
pub const BACKUP_CAPACITY: usize = 2;

/// The state captured by a backup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub expenses: Ledger,
    pub members: MemberRegistry,
}

/// A named snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Backup {
    /// User-chosen label
    pub name: String,

    /// Captured state
    pub data: Snapshot,

    /// When the backup was taken; absent in records written without it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Backup {
    /// Capture the given state under a name
    pub fn capture(name: impl Into<String>, members: &MemberRegistry, expenses: &Ledger) -> Self {
        Self {
            name: name.into(),
            data: Snapshot {
                expenses: expenses.clone(),
                members: members.clone(),
            },
            created_at: Some(Utc::now()),
        }
    }

    pub fn member_count(&self) -> usize {
        self.data.members.len()
    }

    pub fn expense_count(&self) -> usize {
        self.data.expenses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;

    #[test]
    fn test_capture_is_a_copy() {
        let mut members: MemberRegistry = ["A", "B"].into_iter().collect();
        let mut expenses = Ledger::new();
        expenses.push(Expense::new("x", 10.0, "A", &["A".to_string()]).unwrap());

        let backup = Backup::capture("trip", &members, &expenses);

        members.insert("C");
        expenses.clear();

        assert_eq!(backup.member_count(), 2);
        assert_eq!(backup.expense_count(), 1);
        assert!(backup.created_at.is_some());
    }

    #[test]
    fn test_reads_record_without_timestamp() {
        let json = r#"{
            "name": "old",
            "data": {
                "expenses": [{"title": "-", "amount": 5, "payer": "A", "members": ["A"]}],
                "members": ["A"]
            }
        }"#;
        let backup: Backup = serde_json::from_str(json).unwrap();
        assert_eq!(backup.name, "old");
        assert!(backup.created_at.is_none());
        assert_eq!(backup.data.expenses.len(), 1);
    }
}
