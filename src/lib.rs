//! proflog - script and function timing reports from profiling logs
//!
//! Reads a profile log (for example the output of Vim's `:profile`),
//! attributes each `Total time` measurement to the `SCRIPT` or `FUNCTION`
//! marker before it, and reports both groups sorted by time.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let report = proflog::generate_report(Path::new("profile.log"))?;
//! print!("{}", report.to_text());
//! # Ok::<(), proflog::error::ProfileLogError>(())
//! ```

pub mod classifier;
pub mod cli;
pub mod config;
pub mod csv_output;
pub mod entry;
pub mod error;
pub mod json_output;
pub mod parser;
pub mod report;

pub use entry::LogEntry;
pub use error::{ProfileLogError, Result};
pub use parser::{parse_file, parse_reader, LogParser, ParsedLog};
pub use report::{format_seconds, ProfileReport, FUNCTION_REPORT_LIMIT};

use std::path::Path;

/// Parse a log file and sort both entry groups
pub fn generate_report(path: &Path) -> Result<ProfileReport> {
    parse_file(path).map(ProfileReport::from_parsed)
}
