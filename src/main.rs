use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ledger_breakdown::cli::{
    handle_report_command, handle_transactions_command, ReportArgs, TransactionsArgs,
};
use ledger_breakdown::config::{paths::BreakdownPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "breakdown",
    author = "Kaylee Beyene",
    version,
    about = "Per-person revenue and expense breakdown for monthly ledgers",
    long_about = "Ledger Breakdown reads a monthly general-ledger CSV export, \
                  drops subtotal rows, groups expenses by account category and \
                  reports revenue, expenses, net revenue and hourly expense per person."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the monthly breakdown report for a ledger file
    Report(ReportArgs),

    /// Print the categorized ledger as CSV
    #[command(alias = "txn")]
    Transactions(TransactionsArgs),

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    let paths = BreakdownPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Report(args)) => {
            handle_report_command(&settings, args)?;
        }
        Some(Commands::Transactions(args)) => {
            handle_transactions_command(&settings, args)?;
        }
        Some(Commands::Init) => {
            println!("Initializing Ledger Breakdown at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
            println!();
            println!("Edit 'sentinel_periods' to list the subtotal rows your ledger exports contain.");
        }
        Some(Commands::Config) => {
            println!("Ledger Breakdown Configuration");
            println!("==============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!(
                "Initialized:      {}",
                if paths.is_initialized() { "yes" } else { "no" }
            );
            println!();
            println!("Settings:");
            println!("  Sentinel periods: {}", settings.sentinel_periods.join(", "));
            println!(
                "  Columns: period='{}' person='{}' account='{}' amount='{}'",
                settings.columns.period,
                settings.columns.person,
                settings.columns.account,
                settings.columns.amount
            );
            println!("  Currency symbol:  {}", settings.currency_symbol);
        }
        None => {
            println!("Ledger Breakdown - monthly per-person ledger reports");
            println!();
            println!("Run 'breakdown --help' for usage information.");
            println!("Run 'breakdown report <FILE>' to build a report.");
        }
    }

    Ok(())
}
