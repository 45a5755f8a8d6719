//! Export module for warikan
//!
//! Provides data export in two formats:
//! - CSV: the expense ledger (spreadsheet-compatible)
//! - JSON: members, expenses, balances and settlements in one document

pub mod csv;
pub mod json;

pub use csv::export_expenses_csv;
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
