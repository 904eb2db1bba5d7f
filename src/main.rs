use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use voice_ledger::cli::{
    handle_add_command, handle_categories_command, handle_list_command, handle_listen_command,
    ManualEntry,
};
use voice_ledger::config::{LedgerPaths, Settings};
use voice_ledger::models::TransactionType;

#[derive(Parser)]
#[command(
    name = "voice-ledger",
    version,
    about = "Voice-driven income and expense entry",
    long_about = "Voice Ledger fills in a transaction form from speech-recognition \
                  segments and records each transaction once amount, category, \
                  type and date are known."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Process recognizer segments (JSON lines) from a file or stdin
    Listen {
        /// Segment file; reads stdin when omitted
        file: Option<PathBuf>,
    },

    /// Create a transaction manually
    Add {
        /// Amount
        #[arg(short, long)]
        amount: String,
        /// Category label
        #[arg(short, long)]
        category: Option<String>,
        /// Income or Expense (default Income)
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
        /// Transaction date, defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List recorded transactions
    #[command(alias = "ls")]
    List {
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show the category vocabulary
    Categories {
        /// Only show income or expense categories
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
    },

    /// Write default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_logging(&settings);

    match cli.command {
        Some(Commands::Listen { file }) => {
            paths.ensure_directories()?;
            handle_listen_command(&paths, &settings, file)?;
        }
        Some(Commands::Add {
            amount,
            category,
            kind,
            date,
        }) => {
            paths.ensure_directories()?;
            let entry = ManualEntry {
                amount,
                category,
                kind,
                date,
            };
            handle_add_command(&paths, &settings, entry)?;
        }
        Some(Commands::List { limit }) => handle_list_command(&paths, limit)?,
        Some(Commands::Categories { kind }) => handle_categories_command(&settings, kind)?,
        Some(Commands::Init) => {
            println!("Initializing Voice Ledger at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
        }
        Some(Commands::Config) => {
            println!("Voice Ledger Configuration");
            println!("==========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Transactions:     {}", paths.transactions_file().display());
            println!();
            println!("Settings:");
            println!("  Date format:        {}", settings.date_format);
            println!("  Notification secs:  {}", settings.notification_secs);
            println!("  Log filter:         {}", settings.log_filter);
            println!(
                "  Custom vocabulary:  {}",
                if settings.vocabulary.is_some() { "yes" } else { "no" }
            );
        }
        None => {
            println!("Voice Ledger - voice-driven income and expense entry");
            println!();
            println!("Run 'voice-ledger --help' for usage information.");
            println!("Run 'voice-ledger listen' to feed recognizer segments on stdin.");
        }
    }

    Ok(())
}
