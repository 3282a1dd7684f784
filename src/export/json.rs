//! JSON Export functionality
//!
//! Exports a breakdown report to JSON inside a versioned envelope, and reads
//! such exports back with validation.

use crate::error::{BreakdownError, BreakdownResult};
use crate::reports::BreakdownReport;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Exported report with provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Ledger file the report was computed from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,

    /// The report itself
    pub report: BreakdownReport,
}

impl ReportExport {
    /// Wrap a report for export
    pub fn new(report: BreakdownReport, source_file: Option<String>) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            source_file,
            report,
        }
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        self.report.check_consistency()
    }
}

/// Export a report to JSON
pub fn export_report_json<W: Write>(
    export: &ReportExport,
    writer: &mut W,
    pretty: bool,
) -> BreakdownResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, export)
    } else {
        serde_json::to_writer(writer, export)
    }
    .map_err(|e| BreakdownError::Export(e.to_string()))?;

    Ok(())
}

/// Read a JSON export back, validating it
pub fn import_from_json(json_str: &str) -> BreakdownResult<ReportExport> {
    let export: ReportExport =
        serde_json::from_str(json_str).map_err(|e| BreakdownError::Import(e.to_string()))?;

    export.validate().map_err(BreakdownError::Import)?;

    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, ReportingMonth, Transaction};

    fn sample_report() -> BreakdownReport {
        let txns = vec![
            Transaction::new("A", "Cross Charge:Fee", Money::from_cents(10000), "15 March"),
            Transaction::new("A", "Travel:Airfare", Money::from_cents(-4000), "15 March"),
            Transaction::new("B", "Travel:Hotel", Money::from_cents(-6000), "15 March"),
        ];
        BreakdownReport::generate(&txns, ReportingMonth::new(2023, 3).unwrap()).unwrap()
    }

    #[test]
    fn test_export_and_import() {
        let export = ReportExport::new(sample_report(), Some("ledger.csv".into()));

        let mut buffer = Vec::new();
        export_report_json(&export, &mut buffer, true).unwrap();
        let json = String::from_utf8(buffer).unwrap();

        assert!(json.contains("\"schema_version\": \"1.0.0\""));
        assert!(json.contains("\"total_working_hours\": \"184\""));

        let imported = import_from_json(&json).unwrap();
        assert_eq!(imported.report, export.report);
        assert_eq!(imported.source_file.as_deref(), Some("ledger.csv"));
    }

    #[test]
    fn test_amounts_serialized_as_exact_decimals() {
        let export = ReportExport::new(sample_report(), None);
        let value = serde_json::to_value(&export).unwrap();

        assert_eq!(value["report"]["revenue"]["B"], "0");
        assert_eq!(value["report"]["net_revenue"]["A"], "60.00");
        assert_eq!(value["report"]["detailed_expenses"]["Travel"]["B"], "-60.00");
        assert!(value.get("source_file").is_none());
    }

    #[test]
    fn test_import_rejects_schema_mismatch() {
        let mut export = ReportExport::new(sample_report(), None);
        export.schema_version = "0.1.0".into();
        let json = serde_json::to_string(&export).unwrap();

        let err = import_from_json(&json).unwrap_err();
        assert!(matches!(err, BreakdownError::Import(_)));
    }

    #[test]
    fn test_import_rejects_inconsistent_report() {
        let mut export = ReportExport::new(sample_report(), None);
        export.report.total_revenue = Money::from_cents(1);
        let json = serde_json::to_string(&export).unwrap();

        assert!(import_from_json(&json).is_err());
    }
}
