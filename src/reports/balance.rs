//! Balance Report
//!
//! Computes how much each member paid, their net balance, and the list of
//! transfers that settles every balance.
//!
//! The settlement pass is a greedy double loop over debtors and creditors in
//! registry order. It settles every balance but does not minimize the number
//! of transfers.

use std::collections::HashMap;

use crate::models::{Ledger, MemberRegistry};

/// One member's totals
#[derive(Debug, Clone, PartialEq)]
pub struct MemberBalance {
    /// Member name
    pub member: String,
    /// Sum of the expenses this member paid for
    pub total_paid: f64,
    /// Net balance: positive is owed money, negative owes money
    pub balance: f64,
}

impl MemberBalance {
    /// Amount this member should receive
    pub fn receive(&self) -> f64 {
        if self.balance > 0.0 {
            self.balance
        } else {
            0.0
        }
    }

    /// Amount this member should pay
    pub fn pay(&self) -> f64 {
        if self.balance < 0.0 {
            -self.balance
        } else {
            0.0
        }
    }
}

/// A single transfer that moves money from a debtor to a creditor
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

/// Balances and settlement for a registry and ledger
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BalanceReport {
    /// One row per member, in registry order
    pub rows: Vec<MemberBalance>,
    /// Transfers in the order the settlement pass produced them
    pub settlements: Vec<Settlement>,
}

impl BalanceReport {
    /// Compute balances and settlement transfers
    ///
    /// Payers and participants that are not in the registry are ignored.
    pub fn generate(members: &MemberRegistry, expenses: &Ledger) -> Self {
        let mut rows: Vec<MemberBalance> = members
            .iter()
            .map(|m| MemberBalance {
                member: m.to_string(),
                total_paid: 0.0,
                balance: 0.0,
            })
            .collect();

        let index: HashMap<&str, usize> = members.iter().enumerate().map(|(i, m)| (m, i)).collect();

        for expense in expenses.iter() {
            let share = expense.share();

            if let Some(&payer) = index.get(expense.payer.as_str()) {
                rows[payer].total_paid += expense.amount;
            }

            for participant in &expense.participants {
                if let Some(&i) = index.get(participant.as_str()) {
                    rows[i].balance -= share;
                }
            }

            if let Some(&payer) = index.get(expense.payer.as_str()) {
                rows[payer].balance += expense.amount;
            }
        }

        let settlements = settle(&rows);

        Self { rows, settlements }
    }

    /// Look up a member's row
    pub fn row(&self, member: &str) -> Option<&MemberBalance> {
        self.rows.iter().find(|r| r.member == member)
    }

    /// Sum of everything paid
    pub fn total_paid(&self) -> f64 {
        self.rows.iter().map(|r| r.total_paid).sum()
    }

    /// Sum of every positive balance
    pub fn total_receive(&self) -> f64 {
        self.rows.iter().map(MemberBalance::receive).sum()
    }

    /// Sum of every settlement transfer
    pub fn total_settled(&self) -> f64 {
        self.settlements.iter().map(|s| s.amount).sum()
    }

    /// Whether any balance is non-zero
    pub fn is_settled(&self) -> bool {
        self.settlements.is_empty()
    }
}

/// Greedy settlement over a working copy of the balances
fn settle(rows: &[MemberBalance]) -> Vec<Settlement> {
    let mut balances: Vec<f64> = rows.iter().map(|r| r.balance).collect();

    let payers: Vec<usize> = (0..rows.len()).filter(|&i| balances[i] < 0.0).collect();
    let receivers: Vec<usize> = (0..rows.len()).filter(|&i| balances[i] > 0.0).collect();

    let mut settlements = Vec::new();
    for &payer in &payers {
        for &receiver in &receivers {
            if balances[payer] == 0.0 || balances[receiver] == 0.0 {
                continue;
            }

            let amount = balances[payer].abs().min(balances[receiver]);
            balances[payer] += amount;
            balances[receiver] -= amount;

            settlements.push(Settlement {
                from: rows[payer].member.clone(),
                to: rows[receiver].member.clone(),
                amount,
            });
        }
    }

    settlements
}
