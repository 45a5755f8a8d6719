//! Expense CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_expense_list;
use crate::error::{SplitError, SplitResult};
use crate::models::{format_amount, parse_amount};
use crate::services::{ExpenseService, Preapproved};
use crate::storage::Storage;

use super::print_balances;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// Amount paid (e.g. 1200, 12.50, ¥1,200)
        amount: String,
        /// Member who paid
        #[arg(short, long)]
        payer: String,
        /// Short description
        #[arg(short, long, default_value = "")]
        title: String,
        /// Members sharing the cost, comma separated (default: everyone)
        #[arg(short = 'm', long, value_delimiter = ',')]
        participants: Vec<String>,
    },
    /// List expenses (latest few unless --all)
    List {
        /// Show every expense
        #[arg(short, long)]
        all: bool,
    },
    /// Remove an expense by its index
    Remove {
        /// Zero-based index as shown by `expense list`
        index: usize,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> SplitResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            payer,
            title,
            participants,
        } => {
            let amount = parse_amount(&amount, symbol).map_err(|e| SplitError::Validation(e.to_string()))?;

            // Everyone is selected unless a subset is given
            let participants = if participants.is_empty() {
                storage.members().as_slice().to_vec()
            } else {
                participants
            };

            let expense = ExpenseService::new(storage).add(&title, amount, &payer, &participants)?;
            println!(
                "Recorded: {} - {} paid by {}",
                expense.title,
                format_amount(expense.amount, symbol),
                expense.payer
            );
            println!();
            print_balances(storage, settings);
        }

        ExpenseCommands::List { all } => {
            let service = ExpenseService::new(storage);
            let total = service.ledger().len();
            let shown = if all {
                service.all()
            } else {
                service.recent(settings.recent_expense_count)
            };
            let hidden = total - shown.len();
            print!("{}", format_expense_list(&shown, hidden, symbol));
            if shown.is_empty() {
                println!();
            }
        }

        ExpenseCommands::Remove { index } => match ExpenseService::new(storage).remove(index)? {
            Some(removed) => {
                println!(
                    "Removed: {} - {}",
                    removed.title,
                    format_amount(removed.amount, symbol)
                );
                println!();
                print_balances(storage, settings);
            }
            None => {
                println!("No expense at index {}. Nothing was removed.", index);
            }
        },
    }

    Ok(())
}

/// Handle `reset`: clear every member and expense
pub fn handle_reset_command(storage: &mut Storage, force: bool) -> SplitResult<()> {
    if !ExpenseService::new(storage).reset_all(&Preapproved(force))? {
        println!("WARNING: This will delete ALL members and expenses!");
        println!("Backups are kept.");
        println!("To proceed, run again with --force flag:");
        println!("  warikan reset --force");
        return Ok(());
    }

    println!("All members and expenses have been cleared.");
    Ok(())
}
