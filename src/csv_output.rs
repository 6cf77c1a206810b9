//! CSV output format for profile reports
//!
//! `--format csv`: one row per reported entry, scripts first.

use crate::entry::{EntryGroup, LogEntry};
use crate::report::{format_seconds, ProfileReport};

/// CSV output formatter
#[derive(Debug)]
pub struct CsvReportOutput<'a> {
    rows: Vec<(EntryGroup, &'a LogEntry)>,
}

impl<'a> CsvReportOutput<'a> {
    pub fn from_report(report: &'a ProfileReport) -> Self {
        let scripts = report.scripts().iter().map(|e| (EntryGroup::Script, e));
        let functions = report
            .top_functions()
            .iter()
            .map(|e| (EntryGroup::Function, e));

        Self {
            rows: scripts.chain(functions).collect(),
        }
    }

    fn header() -> &'static str {
        "group,label,total_time_secs"
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn format_row(group: EntryGroup, entry: &LogEntry) -> String {
        format!(
            "{},{},{}",
            group.as_str(),
            Self::escape_field(&entry.label),
            format_seconds(entry.total_time_secs)
        )
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        output.push_str(Self::header());
        output.push('\n');

        for (group, entry) in &self.rows {
            output.push_str(&Self::format_row(*group, entry));
            output.push('\n');
        }

        output
    }
}
