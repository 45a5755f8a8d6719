//! Backup CLI commands
//!
//! Implements CLI commands for the two backup slots.

use clap::Subcommand;

use crate::backup::{BackupManager, CreateOutcome, RestoreManager};
use crate::config::settings::Settings;
use crate::display::format_backup_list;
use crate::error::SplitResult;
use crate::models::BACKUP_CAPACITY;
use crate::services::Preapproved;
use crate::storage::Storage;

use super::print_balances;

/// Backup subcommands
#[derive(Subcommand)]
pub enum BackupCommands {
    /// Snapshot members and expenses under a name
    Create {
        /// Backup name
        name: String,

        /// Overwrite the oldest backup when all slots are taken
        #[arg(short, long)]
        force: bool,
    },

    /// List stored backups, oldest first
    List,

    /// Replace current members and expenses with a backup
    Restore {
        /// Backup index as shown by `backup list`
        index: usize,
    },

    /// Delete a backup
    Delete {
        /// Backup index as shown by `backup list`
        index: usize,
    },
}

/// Handle a backup command
pub fn handle_backup_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: BackupCommands,
) -> SplitResult<()> {
    match cmd {
        BackupCommands::Create { name, force } => {
            let outcome = BackupManager::new(storage).create_backup(&name, &Preapproved(force))?;
            match outcome {
                CreateOutcome::Created { backup, evicted } => {
                    for old in &evicted {
                        println!("Overwrote backup: {}", old.name);
                    }
                    println!(
                        "Backup created: {} ({} member(s), {} expense(s))",
                        backup.name,
                        backup.member_count(),
                        backup.expense_count()
                    );
                }
                CreateOutcome::Declined => {
                    println!(
                        "All {} backup slots are in use. Creating a new one overwrites the oldest.",
                        BACKUP_CAPACITY
                    );
                    println!("To proceed, run again with --force flag:");
                    println!("  warikan backup create {} --force", name);
                }
            }
        }

        BackupCommands::List => {
            let backups = BackupManager::new(storage).list_backups()?;

            if backups.is_empty() {
                println!("No backups found.");
                println!("Create one with: warikan backup create <name>");
                return Ok(());
            }

            print!("{}", format_backup_list(&backups));
            println!();
            println!("Total: {}/{} backup slot(s) used", backups.len(), BACKUP_CAPACITY);
        }

        BackupCommands::Restore { index } => {
            let result = RestoreManager::new(storage).restore_backup(index)?;
            println!("Restore complete!");
            println!("{}", result.summary());
            println!();
            print_balances(storage, settings);
        }

        BackupCommands::Delete { index } => {
            let removed = BackupManager::new(storage).delete_backup(index)?;
            println!("Deleted backup: {}", removed.name);
        }
    }

    Ok(())
}
