//! YAML Export functionality
//!
//! Exports a breakdown report to YAML for human-readable archiving.

use crate::error::{BreakdownError, BreakdownResult};
use crate::export::json::ReportExport;
use std::io::Write;

/// Export a report to YAML format
pub fn export_report_yaml<W: Write>(export: &ReportExport, writer: &mut W) -> BreakdownResult<()> {
    // Add a header comment
    writeln!(writer, "# Ledger Breakdown Report {}", export.report.month)
        .map_err(|e| BreakdownError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| BreakdownError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| BreakdownError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| BreakdownError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| BreakdownError::Export(e.to_string()))?;

    Ok(())
}

/// Read a YAML export back, validating it
pub fn import_from_yaml(yaml_str: &str) -> BreakdownResult<ReportExport> {
    let export: ReportExport =
        serde_yaml::from_str(yaml_str).map_err(|e| BreakdownError::Import(e.to_string()))?;

    export.validate().map_err(BreakdownError::Import)?;

    Ok(export)
}
