//! Single-pass profile log parser
//!
//! Marker lines set a pending name; the next measurement line consumes it.
//! A pending script name takes precedence over a pending function name, and
//! a measurement with nothing pending is dropped.

use crate::classifier::{classify_line, parse_measurement, LineKind};
use crate::entry::LogEntry;
use crate::error::{ProfileLogError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Entries collected from one log, in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedLog {
    pub scripts: Vec<LogEntry>,
    pub functions: Vec<LogEntry>,
}

/// Parser state for one pass over a log
#[derive(Debug, Default)]
pub struct LogParser {
    pending_script: Option<String>,
    pending_function: Option<String>,
    parsed: ParsedLog,
}

impl LogParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line. `line_no` is 1-based and only used for errors.
    pub fn feed_line(&mut self, line_no: usize, line: &str) -> Result<()> {
        match classify_line(line) {
            LineKind::Script(name) => self.pending_script = Some(name.to_string()),
            LineKind::Function(name) => self.pending_function = Some(name.to_string()),
            LineKind::Measurement(text) => {
                let secs = parse_measurement(text).map_err(|source| {
                    ProfileLogError::MalformedMeasurement {
                        line: line_no,
                        text: text.to_string(),
                        source,
                    }
                })?;
                self.record(secs);
            }
            LineKind::Other => {}
        }
        Ok(())
    }

    fn record(&mut self, secs: f64) {
        if let Some(name) = take_pending(&mut self.pending_script) {
            self.parsed.scripts.push(LogEntry::new(name, secs));
        } else if let Some(name) = take_pending(&mut self.pending_function) {
            self.parsed.functions.push(LogEntry::new(name, secs));
        }
    }

    /// Entries collected so far, in file order
    pub fn finish(self) -> ParsedLog {
        self.parsed
    }
}

// An empty name counts as nothing pending
fn take_pending(slot: &mut Option<String>) -> Option<String> {
    slot.take().filter(|name| !name.is_empty())
}

/// Parse every line from a reader
pub fn parse_reader<R: BufRead>(reader: R, source: &Path) -> Result<ParsedLog> {
    let mut parser = LogParser::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| ProfileLogError::io(source, e))?;
        parser.feed_line(idx + 1, &line)?;
    }
    Ok(parser.finish())
}

/// Open and parse a log file
pub fn parse_file(path: &Path) -> Result<ParsedLog> {
    let file = File::open(path).map_err(|e| ProfileLogError::io(path, e))?;
    tracing::debug!("Opened profile log {}", path.display());

    let parsed = parse_reader(BufReader::new(file), path)?;
    tracing::debug!(
        scripts = parsed.scripts.len(),
        functions = parsed.functions.len(),
        "Parsed profile log"
    );
    Ok(parsed)
}
