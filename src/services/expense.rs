//! Expense service
//!
//! Records and removes expenses, and resets the whole group.

use crate::audit::{AuditEntry, EntityType};
use crate::error::{SplitError, SplitResult};
use crate::models::{Expense, Ledger};
use crate::reports::BalanceReport;
use crate::storage::Storage;

use super::Confirm;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a mut Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense
    ///
    /// Fails if the amount is not a positive number, the payer is missing,
    /// no participants are given, or any name is not a registered member.
    pub fn add(
        &mut self,
        title: &str,
        amount: f64,
        payer: &str,
        participants: &[String],
    ) -> SplitResult<Expense> {
        let expense = Expense::new(title, amount, payer, participants)
            .map_err(|e| SplitError::Validation(e.to_string()))?;

        let members = self.storage.members();
        if !members.contains(&expense.payer) {
            return Err(SplitError::member_not_found(&expense.payer));
        }
        if let Some(unknown) = expense.participants.iter().find(|p| !members.contains(p)) {
            return Err(SplitError::member_not_found(unknown.as_str()));
        }

        let mut expenses = self.storage.expenses().clone();
        expenses.push(expense.clone());
        let index = expenses.len() - 1;
        self.storage.set_expenses(expenses)?;

        self.storage.audit(&AuditEntry::create(
            EntityType::Expense,
            index.to_string(),
            Some(expense.title.clone()),
            &expense,
        ));

        Ok(expense)
    }

    /// Remove the expense at a zero-based ledger position
    ///
    /// An out-of-range index is a no-op and returns `None`.
    pub fn remove(&mut self, index: usize) -> SplitResult<Option<Expense>> {
        let mut expenses = self.storage.expenses().clone();
        let Some(removed) = expenses.remove(index) else {
            return Ok(None);
        };
        self.storage.set_expenses(expenses)?;

        self.storage.audit(&AuditEntry::delete(
            EntityType::Expense,
            index.to_string(),
            Some(removed.title.clone()),
            &removed,
        ));

        Ok(Some(removed))
    }

    /// The latest `count` expenses with their ledger positions, oldest first
    pub fn recent(&self, count: usize) -> Vec<(usize, Expense)> {
        self.storage
            .expenses()
            .recent(count)
            .map(|(i, e)| (i, e.clone()))
            .collect()
    }

    /// Every expense with its ledger position
    pub fn all(&self) -> Vec<(usize, Expense)> {
        self.recent(self.storage.expenses().len())
    }

    /// The ledger
    pub fn ledger(&self) -> &Ledger {
        self.storage.expenses()
    }

    /// Balances and settlement for the current state
    pub fn balances(&self) -> BalanceReport {
        BalanceReport::generate(self.storage.members(), self.storage.expenses())
    }

    /// Clear every member and expense after confirmation
    ///
    /// Backups survive a reset. Returns `false` if the confirmation was
    /// declined.
    pub fn reset_all(&mut self, confirm: &dyn Confirm) -> SplitResult<bool> {
        if !confirm.confirm("Really reset all data? This cannot be undone.") {
            return Ok(false);
        }

        let before = self.storage.snapshot();
        self.storage.clear_all()?;
        self.storage.audit(&AuditEntry::reset(&before));

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{MemberService, Preapproved};
    use crate::storage::MemoryStore;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn create_test_storage(members: &[&str]) -> Storage {
        let mut storage = Storage::with_store(MemoryStore::new());
        let mut service = MemberService::new(&mut storage);
        for name in members {
            service.add(name).unwrap();
        }
        storage
    }

    #[test]
    fn test_add_expense() {
        let mut storage = create_test_storage(&["A", "B"]);
        let mut service = ExpenseService::new(&mut storage);

        let expense = service.add("", 100.0, "A", &names(&["A", "B"])).unwrap();
        assert_eq!(expense.title, "-");
        assert_eq!(service.ledger().len(), 1);

        let report = service.balances();
        assert_eq!(report.settlements.len(), 1);
        assert_eq!(report.settlements[0].from, "B");
        assert_eq!(report.settlements[0].amount, 50.0);
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let mut storage = create_test_storage(&["A", "B"]);
        let mut service = ExpenseService::new(&mut storage);
        let everyone = names(&["A", "B"]);

        assert!(service.add("x", 0.0, "A", &everyone).unwrap_err().is_validation());
        assert!(service.add("x", -3.0, "A", &everyone).unwrap_err().is_validation());
        assert!(service.add("x", f64::NAN, "A", &everyone).unwrap_err().is_validation());
        assert!(service.add("x", 10.0, "", &everyone).unwrap_err().is_validation());
        assert!(service.add("x", 10.0, "A", &[]).unwrap_err().is_validation());
        assert!(service.add("x", 10.0, "Z", &everyone).unwrap_err().is_not_found());
        assert!(service
            .add("x", 10.0, "A", &names(&["A", "Z"]))
            .unwrap_err()
            .is_not_found());

        assert!(service.ledger().is_empty());
    }

    #[test]
    fn test_remove_expense() {
        let mut storage = create_test_storage(&["A", "B"]);
        let mut service = ExpenseService::new(&mut storage);
        service.add("first", 10.0, "A", &names(&["A", "B"])).unwrap();
        service.add("second", 20.0, "B", &names(&["A", "B"])).unwrap();

        let removed = service.remove(0).unwrap().unwrap();
        assert_eq!(removed.title, "first");
        assert_eq!(service.ledger().len(), 1);
        assert_eq!(service.ledger().get(0).unwrap().title, "second");
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut storage = create_test_storage(&["A"]);
        let mut service = ExpenseService::new(&mut storage);
        service.add("only", 10.0, "A", &names(&["A"])).unwrap();

        assert!(service.remove(1).unwrap().is_none());
        assert!(service.remove(usize::MAX).unwrap().is_none());
        assert_eq!(service.ledger().len(), 1);

        storage.load_all().unwrap();
        assert_eq!(storage.expenses().len(), 1);
    }

    #[test]
    fn test_recent_and_all() {
        let mut storage = create_test_storage(&["A"]);
        let mut service = ExpenseService::new(&mut storage);
        for i in 0..5 {
            service.add(&format!("e{}", i), 1.0, "A", &names(&["A"])).unwrap();
        }

        let recent = service.recent(3);
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].0, 2);
        assert_eq!(recent[2].1.title, "e4");
        assert_eq!(service.all().len(), 5);
    }

    #[test]
    fn test_reset_requires_confirmation() {
        let mut storage = create_test_storage(&["A", "B"]);
        let mut service = ExpenseService::new(&mut storage);
        service.add("x", 10.0, "A", &names(&["A", "B"])).unwrap();

        assert!(!service.reset_all(&Preapproved(false)).unwrap());
        assert_eq!(service.ledger().len(), 1);

        assert!(service.reset_all(&|_: &str| true).unwrap());
        assert!(service.ledger().is_empty());
        assert!(storage.members().is_empty());

        storage.load_all().unwrap();
        assert!(storage.members().is_empty());
        assert!(storage.expenses().is_empty());
    }
}
