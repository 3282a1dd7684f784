//! CLI commands for ledger reports
//!
//! Loads a ledger CSV, runs it through the normalize/categorize/aggregate
//! pipeline and renders the breakdown in the requested format.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use clap::{Args, ValueEnum};
use tracing::{info, warn};

use crate::config::paths::export_dir_name;
use crate::config::Settings;
use crate::error::{BreakdownError, BreakdownResult};
use crate::export::{export_report_json, export_report_yaml, export_transactions_csv, ReportExport};
use crate::models::{ReportingMonth, Transaction};
use crate::reports::BreakdownReport;
use crate::services::{categorize, ImportService};

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Terminal table
    Text,
    /// JSON with export envelope
    Json,
    /// YAML with export envelope
    Yaml,
    /// Flat CSV of report metrics
    Csv,
}

/// Arguments for `breakdown report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Ledger CSV file
    pub file: PathBuf,

    /// Reporting month (YYYY-MM); derived from the ledger when omitted
    #[arg(short, long)]
    pub month: Option<String>,

    /// Year used when deriving the month from the ledger's period labels
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write every export format into a dated directory under this path
    #[arg(long)]
    pub export_dir: Option<PathBuf>,
}

/// Arguments for `breakdown transactions`
#[derive(Args, Debug)]
pub struct TransactionsArgs {
    /// Ledger CSV file
    pub file: PathBuf,

    /// Write the categorized ledger to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle `breakdown report`
pub fn handle_report_command(settings: &Settings, args: ReportArgs) -> BreakdownResult<()> {
    let transactions = load_transactions(settings, &args.file)?;
    let month = resolve_month(args.month.as_deref(), args.year, &transactions)?;

    let report = BreakdownReport::generate(&transactions, month)?;
    let source = args.file.display().to_string();

    {
        let mut writer = open_output(args.output.as_deref())?;
        write_report(&report, args.format, settings, Some(source.clone()), &mut writer)?;
        writer.flush()?;
    }

    if let Some(ref output) = args.output {
        println!("Report written to: {}", output.display());
    }

    if let Some(base) = args.export_dir {
        let dir = base.join(export_dir_name(&args.file, Local::now().date_naive()));
        export_bundle(&dir, &report, &transactions, source)?;
        println!("Exports written to: {}", dir.display());
    }

    Ok(())
}

/// Handle `breakdown transactions`
pub fn handle_transactions_command(
    settings: &Settings,
    args: TransactionsArgs,
) -> BreakdownResult<()> {
    let transactions = load_transactions(settings, &args.file)?;
    let categorized = categorize(&transactions)?;

    let mut writer = open_output(args.output.as_deref())?;
    export_transactions_csv(&categorized, &mut writer)?;
    writer.flush()?;
    drop(writer);

    if let Some(output) = args.output {
        println!(
            "{} transactions written to: {}",
            categorized.len(),
            output.display()
        );
    }

    Ok(())
}

/// Import and normalize a ledger file using the configured columns and sentinels
pub fn load_transactions(settings: &Settings, path: &Path) -> BreakdownResult<Vec<Transaction>> {
    let importer = ImportService::new(settings.columns.clone());
    let records = importer.parse_csv_file(path)?;
    settings.normalizer().normalize(&records)
}

/// Pick the reporting month: explicit `YYYY-MM`, or the last row's period label
pub fn resolve_month(
    explicit: Option<&str>,
    year: Option<i32>,
    transactions: &[Transaction],
) -> BreakdownResult<ReportingMonth> {
    if let Some(value) = explicit {
        return Ok(ReportingMonth::parse(value)?);
    }

    let last = transactions.last().ok_or_else(|| {
        BreakdownError::InvalidPeriod(
            "ledger has no transactions; pass --month YYYY-MM".to_string(),
        )
    })?;

    let year = year.unwrap_or_else(|| ReportingMonth::current_month().year);
    let month = ReportingMonth::from_period_label(&last.period_label, year)?;
    warn!(
        period_label = %last.period_label,
        month = %month,
        "Reporting month derived from ledger; pass --month to override"
    );
    Ok(month)
}

fn write_report<W: Write>(
    report: &BreakdownReport,
    format: ReportFormat,
    settings: &Settings,
    source: Option<String>,
    writer: &mut W,
) -> BreakdownResult<()> {
    match format {
        ReportFormat::Text => {
            write!(
                writer,
                "{}",
                report.format_terminal_with_symbol(&settings.currency_symbol)
            )?;
        }
        ReportFormat::Json => {
            let export = ReportExport::new(report.clone(), source);
            export_report_json(&export, writer, true)?;
            writeln!(writer)?;
        }
        ReportFormat::Yaml => {
            let export = ReportExport::new(report.clone(), source);
            export_report_yaml(&export, writer)?;
        }
        ReportFormat::Csv => report.export_csv(writer)?,
    }
    Ok(())
}

fn export_bundle(
    dir: &Path,
    report: &BreakdownReport,
    transactions: &[Transaction],
    source: String,
) -> BreakdownResult<()> {
    std::fs::create_dir_all(dir).map_err(|e| {
        BreakdownError::Export(format!("Failed to create {}: {}", dir.display(), e))
    })?;

    let export = ReportExport::new(report.clone(), Some(source));

    let mut json = create_file(&dir.join("report.json"))?;
    export_report_json(&export, &mut json, true)?;
    json.flush()?;

    let mut yaml = create_file(&dir.join("report.yaml"))?;
    export_report_yaml(&export, &mut yaml)?;
    yaml.flush()?;

    let mut csv = create_file(&dir.join("report.csv"))?;
    report.export_csv(&mut csv)?;
    csv.flush()?;

    let categorized = categorize(transactions)?;
    let mut ledger = create_file(&dir.join("transactions.csv"))?;
    export_transactions_csv(&categorized, &mut ledger)?;
    ledger.flush()?;

    info!(dir = %dir.display(), "Export bundle written");
    Ok(())
}

fn create_file(path: &Path) -> BreakdownResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        BreakdownError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

fn open_output(path: Option<&Path>) -> BreakdownResult<Box<dyn Write>> {
    match path {
        Some(path) => Ok(Box::new(create_file(path)?)),
        None => Ok(Box::new(std::io::stdout().lock())),
    }
}
