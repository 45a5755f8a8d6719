use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use warikan_cli::cli::{
    handle_backup_command, handle_expense_command, handle_export_command,
    handle_history_command, handle_member_command, handle_reset_command, print_balances,
    ExportFormat,
};
use warikan_cli::config::{paths::SplitPaths, settings::Settings};
use warikan_cli::storage::{init::needs_initialization, Storage};

#[derive(Parser)]
#[command(
    name = "warikan",
    version,
    about = "Split shared expenses and settle up",
    long_about = "warikan keeps a list of members and the expenses they paid for, \
                  works out who owes whom, and proposes the transfers that settle \
                  the group."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Member management commands
    #[command(subcommand)]
    Member(warikan_cli::cli::MemberCommands),

    /// Expense management commands
    #[command(subcommand)]
    Expense(warikan_cli::cli::ExpenseCommands),

    /// Show balances and the settlement plan
    Balance,

    /// Backup management commands
    #[command(subcommand)]
    Backup(warikan_cli::cli::BackupCommands),

    /// Delete every member and expense (backups are kept)
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Export the ledger
    Export {
        /// Export format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SplitPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    if !settings.audit_enabled {
        storage = storage.with_audit(None);
    }
    storage.load_all()?;

    match cli.command {
        Some(Commands::Member(cmd)) => {
            handle_member_command(&mut storage, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut storage, &settings, cmd)?;
        }
        Some(Commands::Balance) => print_balances(&storage, &settings),
        Some(Commands::Backup(cmd)) => {
            handle_backup_command(&mut storage, &settings, cmd)?;
        }
        Some(Commands::Reset { force }) => {
            handle_reset_command(&mut storage, force)?;
        }
        Some(Commands::Export { format, output }) => {
            handle_export_command(&storage, format, output)?;
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&storage, limit)?;
        }
        Some(Commands::Init) => {
            println!("Initializing warikan at: {}", paths.base_dir().display());
            warikan_cli::storage::init::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Next steps:");
            println!("  warikan member add <name>");
            println!("  warikan expense add <amount> --payer <name>");
        }
        Some(Commands::Config) => {
            println!("warikan Configuration");
            println!("=====================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!(
                "Initialized:     {}",
                if needs_initialization(&paths) { "no (run 'warikan init')" } else { "yes" }
            );
            println!();
            println!("Settings:");
            println!("  Currency symbol:      {}", settings.currency_symbol);
            println!("  Recent expense count: {}", settings.recent_expense_count);
            println!("  Audit enabled:        {}", settings.audit_enabled);
        }
        None => {
            println!("warikan - split shared expenses");
            println!();
            println!("Run 'warikan --help' for usage information.");
            if needs_initialization(&paths) {
                println!("Run 'warikan init' to set up the data directory.");
            }
        }
    }

    Ok(())
}
