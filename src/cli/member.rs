//! Member CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::SplitResult;
use crate::services::MemberService;
use crate::storage::Storage;

use super::print_balances;

/// Member subcommands
#[derive(Subcommand)]
pub enum MemberCommands {
    /// Register a new member
    Add {
        /// Member name (must be unique)
        name: String,
    },
    /// List members in the order they were added
    List,
}

/// Handle a member command
pub fn handle_member_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: MemberCommands,
) -> SplitResult<()> {
    match cmd {
        MemberCommands::Add { name } => {
            let added = MemberService::new(storage).add(&name)?;
            println!("Added member: {}", added);
            println!();
            print_balances(storage, settings);
        }

        MemberCommands::List => {
            let members = MemberService::new(storage).list();
            if members.is_empty() {
                println!("No members yet.");
                println!("Add one with: warikan member add <name>");
                return Ok(());
            }

            for member in &members {
                println!("  {}", member);
            }
            println!("\nTotal: {} member(s)", members.len());
        }
    }

    Ok(())
}
