//! CSV Export functionality
//!
//! Exports the expense ledger to CSV, one row per expense.

use std::io::Write;

use crate::error::{SplitError, SplitResult};
use crate::models::Ledger;

/// Separator used between participant names inside the participants column
pub const PARTICIPANT_SEPARATOR: &str = ";";

/// Export every expense to CSV
///
/// Columns: `Index,Title,Amount,Payer,Participants`.
pub fn export_expenses_csv<W: Write>(expenses: &Ledger, writer: W) -> SplitResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Index", "Title", "Amount", "Payer", "Participants"])
        .map_err(|e| SplitError::Export(e.to_string()))?;

    for (index, expense) in expenses.iter().enumerate() {
        csv_writer
            .write_record([
                index.to_string(),
                expense.title.clone(),
                format!("{:.2}", expense.amount),
                expense.payer.clone(),
                expense.participants.join(PARTICIPANT_SEPARATOR),
            ])
            .map_err(|e| SplitError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| SplitError::Export(e.to_string()))?;

    Ok(())
}
