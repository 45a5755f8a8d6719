//! JSON Export functionality
//!
//! Exports members, expenses and the derived balances in one document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{SplitError, SplitResult};
use crate::models::{Expense, Ledger, MemberRegistry};
use crate::reports::BalanceReport;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// One member's row in the export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedBalance {
    pub member: String,
    pub total_paid: f64,
    pub receive: f64,
    pub pay: f64,
}

/// One settlement line in the export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedSettlement {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

/// Full export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub members: Vec<String>,
    pub expenses: Vec<Expense>,
    pub balances: Vec<ExportedBalance>,
    pub settlements: Vec<ExportedSettlement>,
}

impl FullExport {
    /// Build an export from the current registry and ledger
    pub fn new(members: &MemberRegistry, expenses: &Ledger) -> Self {
        let report = BalanceReport::generate(members, expenses);

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            members: members.as_slice().to_vec(),
            expenses: expenses.iter().cloned().collect(),
            balances: report
                .rows
                .iter()
                .map(|r| ExportedBalance {
                    member: r.member.clone(),
                    total_paid: r.total_paid,
                    receive: r.receive(),
                    pay: r.pay(),
                })
                .collect(),
            settlements: report
                .settlements
                .into_iter()
                .map(|s| ExportedSettlement {
                    from: s.from,
                    to: s.to,
                    amount: s.amount,
                })
                .collect(),
        }
    }
}

/// Write the full export as pretty-printed JSON
pub fn export_full_json<W: Write>(
    members: &MemberRegistry,
    expenses: &Ledger,
    writer: W,
) -> SplitResult<()> {
    let export = FullExport::new(members, expenses);
    serde_json::to_writer_pretty(writer, &export)
        .map_err(|e| SplitError::Export(format!("Failed to write JSON export: {}", e)))
}
