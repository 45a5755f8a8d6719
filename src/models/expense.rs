//! Expense model and ledger
//!
//! An expense records who paid, how much, and which members share the cost.
//! Expenses are immutable once created; the ledger only supports appending
//! and removing by position.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::is_valid_amount;

/// Title used when an expense is recorded without one
pub const DEFAULT_TITLE: &str = "-";

/// A single shared payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Short description of the payment
    pub title: String,

    /// Amount paid
    pub amount: f64,

    /// Member who paid
    pub payer: String,

    /// Members sharing the cost
    #[serde(rename = "members")]
    pub participants: Vec<String>,
}

impl Expense {
    /// Create a validated expense
    ///
    /// An empty title becomes [`DEFAULT_TITLE`]. Participants are
    /// de-duplicated keeping the first occurrence.
    pub fn new(
        title: &str,
        amount: f64,
        payer: &str,
        participants: &[String],
    ) -> Result<Self, ExpenseValidationError> {
        if !is_valid_amount(amount) {
            return Err(ExpenseValidationError::InvalidAmount(amount));
        }

        let payer = payer.trim();
        if payer.is_empty() {
            return Err(ExpenseValidationError::MissingPayer);
        }

        let mut unique: Vec<String> = Vec::with_capacity(participants.len());
        for name in participants {
            let name = name.trim();
            if !name.is_empty() && !unique.iter().any(|p| p == name) {
                unique.push(name.to_string());
            }
        }
        if unique.is_empty() {
            return Err(ExpenseValidationError::NoParticipants);
        }

        let title = title.trim();
        Ok(Self {
            title: if title.is_empty() {
                DEFAULT_TITLE.to_string()
            } else {
                title.to_string()
            },
            amount,
            payer: payer.to_string(),
            participants: unique,
        })
    }

    /// Amount each participant owes for this expense
    pub fn share(&self) -> f64 {
        self.amount / self.participants.len() as f64
    }

    /// Check if a member shares this expense
    pub fn involves(&self, member: &str) -> bool {
        self.participants.iter().any(|p| p == member)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {:.2} (payer: {}, members: {})",
            self.title,
            self.amount,
            self.payer,
            self.participants.join(", ")
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseValidationError {
    InvalidAmount(f64),
    MissingPayer,
    NoParticipants,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAmount(amount) => {
                write!(f, "Amount must be a positive number, got {}", amount)
            }
            Self::MissingPayer => write!(f, "A payer must be selected"),
            Self::NoParticipants => write!(f, "At least one member must share the expense"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// Ordered list of expenses
///
/// Serializes as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger(Vec<Expense>);

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an expense
    pub fn push(&mut self, expense: Expense) {
        self.0.push(expense);
    }

    /// Remove the expense at a zero-based position
    ///
    /// Returns `None` and leaves the ledger untouched when the index is out
    /// of range.
    pub fn remove(&mut self, index: usize) -> Option<Expense> {
        if index < self.0.len() {
            Some(self.0.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&Expense> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Expense> {
        self.0.iter()
    }

    /// The last `count` expenses with their ledger positions, oldest first
    pub fn recent(&self, count: usize) -> impl Iterator<Item = (usize, &Expense)> {
        let start = self.0.len().saturating_sub(count);
        self.0.iter().enumerate().skip(start)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Sum of every expense amount
    pub fn total(&self) -> f64 {
        self.0.iter().map(|e| e.amount).sum()
    }
}

impl From<Vec<Expense>> for Ledger {
    fn from(expenses: Vec<Expense>) -> Self {
        Self(expenses)
    }
}

impl FromIterator<Expense> for Ledger {
    fn from_iter<I: IntoIterator<Item = Expense>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
