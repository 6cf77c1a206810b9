//! JSON output format for profile reports
//!
//! `--format json`: same ordering and function limit as the text report.

use crate::entry::LogEntry;
use crate::error::Result;
use crate::report::ProfileReport;
use serde::{Deserialize, Serialize};

/// A single measured entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonEntry {
    /// Trimmed marker line
    pub label: String,
    /// Total time in seconds (`null` when not finite)
    pub total_time_secs: f64,
}

impl From<&LogEntry> for JsonEntry {
    fn from(entry: &LogEntry) -> Self {
        Self {
            label: entry.label.clone(),
            total_time_secs: entry.total_time_secs,
        }
    }
}

/// Entry counts for the report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonSummary {
    pub scripts: usize,
    pub functions: usize,
    /// Function entries dropped by the report limit
    pub functions_omitted: usize,
}

/// Root JSON output structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    /// Format version identifier
    pub version: String,
    /// Format name
    pub format: String,
    pub scripts: Vec<JsonEntry>,
    pub functions: Vec<JsonEntry>,
    pub summary: JsonSummary,
}

impl JsonReport {
    pub fn from_report(report: &ProfileReport) -> Self {
        let scripts: Vec<JsonEntry> = report.scripts().iter().map(JsonEntry::from).collect();
        let functions: Vec<JsonEntry> =
            report.top_functions().iter().map(JsonEntry::from).collect();

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "proflog-json-v1".to_string(),
            summary: JsonSummary {
                scripts: scripts.len(),
                functions: functions.len(),
                functions_omitted: report.omitted_functions(),
            },
            scripts,
            functions,
        }
    }

    /// Serialize to pretty-printed JSON with a trailing newline
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}
