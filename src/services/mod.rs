//! Service layer for warikan
//!
//! The service layer provides the validated mutation operations on top of the
//! storage layer. Every operation either completes, including its write to
//! the store, or leaves state unchanged.

pub mod expense;
pub mod member;

pub use expense::ExpenseService;
pub use member::MemberService;

/// Confirmation gate for destructive operations
///
/// The view layer decides how to ask; a `false` answer aborts the operation
/// without an error.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Gate that answers every prompt the same way (`--force` style flags)
#[derive(Debug, Clone, Copy)]
pub struct Preapproved(pub bool);

impl Confirm for Preapproved {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}
