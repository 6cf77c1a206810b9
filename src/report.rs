//! Sorted report over a parsed profile log
//!
//! Text layout: every script entry, one blank line, then at most
//! [`FUNCTION_REPORT_LIMIT`] function entries.

use crate::cli::OutputFormat;
use crate::csv_output::CsvReportOutput;
use crate::entry::{sort_entries, LogEntry};
use crate::error::Result;
use crate::json_output::JsonReport;
use crate::parser::ParsedLog;
use std::io::Write;

/// Number of function entries shown in any report
pub const FUNCTION_REPORT_LIMIT: usize = 50;

/// Script and function entries, each sorted by total time descending
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileReport {
    scripts: Vec<LogEntry>,
    functions: Vec<LogEntry>,
}

impl ProfileReport {
    pub fn from_parsed(parsed: ParsedLog) -> Self {
        let ParsedLog {
            mut scripts,
            mut functions,
        } = parsed;
        sort_entries(&mut scripts);
        sort_entries(&mut functions);
        Self { scripts, functions }
    }

    /// All script entries
    pub fn scripts(&self) -> &[LogEntry] {
        &self.scripts
    }

    /// The top function entries that make it into the report
    pub fn top_functions(&self) -> &[LogEntry] {
        let end = self.functions.len().min(FUNCTION_REPORT_LIMIT);
        &self.functions[..end]
    }

    /// Function entries cut by the report limit
    pub fn omitted_functions(&self) -> usize {
        self.functions.len() - self.top_functions().len()
    }

    /// Render as plain text
    pub fn to_text(&self) -> String {
        let mut output = String::new();

        for entry in &self.scripts {
            push_line(&mut output, entry);
        }

        output.push('\n');

        for entry in self.top_functions() {
            push_line(&mut output, entry);
        }

        output
    }

    /// Write the report in the requested format
    pub fn render<W: Write>(&self, format: OutputFormat, out: &mut W) -> Result<()> {
        let rendered = match format {
            OutputFormat::Text => self.to_text(),
            OutputFormat::Json => JsonReport::from_report(self).to_json()?,
            OutputFormat::Csv => CsvReportOutput::from_report(self).to_csv(),
        };
        out.write_all(rendered.as_bytes())?;
        out.flush()?;

        tracing::debug!(
            ?format,
            scripts = self.scripts.len(),
            functions = self.top_functions().len(),
            omitted = self.omitted_functions(),
            "Rendered report"
        );
        Ok(())
    }
}

fn push_line(output: &mut String, entry: &LogEntry) {
    output.push_str(&entry.label);
    output.push(' ');
    output.push_str(&format_seconds(entry.total_time_secs));
    output.push('\n');
}

/// Format a time value as the shortest decimal that round-trips.
///
/// Integral values keep `.0`. Magnitudes below `1e-4` or from `1e16` up use
/// scientific notation with a signed, two-digit exponent (`1.5e-05`,
/// `1e+16`).
pub fn format_seconds(secs: f64) -> String {
    if secs.is_nan() {
        return "nan".to_string();
    }

    // Debug already picks the shortest round-trip digits and the same
    // scientific cut-offs; only the exponent spelling differs.
    let repr = format!("{secs:?}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}
