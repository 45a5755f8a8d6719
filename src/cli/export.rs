//! CLI command for data export
//!
//! Writes the ledger as CSV or the full state as JSON, to a file or stdout.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::SplitResult;
use crate::export::{export_expenses_csv, export_full_json};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (expenses only)
    Csv,
    /// JSON format (members, expenses, balances and settlements)
    Json,
}

/// Handle the export command
pub fn handle_export_command(
    storage: &Storage,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> SplitResult<()> {
    match output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(&path)?);
            write_export(storage, format, &mut writer)?;
            writer.flush()?;
            println!(
                "Exported {} expense(s) to {}",
                storage.expenses().len(),
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_export(storage, format, &mut handle)?;
            if matches!(format, ExportFormat::Json) {
                writeln!(handle)?;
            }
        }
    }

    Ok(())
}

fn write_export<W: Write>(storage: &Storage, format: ExportFormat, writer: W) -> SplitResult<()> {
    match format {
        ExportFormat::Csv => export_expenses_csv(storage.expenses(), writer),
        ExportFormat::Json => export_full_json(storage.members(), storage.expenses(), writer),
    }
}
