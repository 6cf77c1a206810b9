//! Line classification for profile logs
//!
//! Each raw line is matched against a fixed set of prefixes, in priority
//! order:
//!
//! 1. `SCRIPT` - script marker
//! 2. `FUNCTI` - function marker (also matches `FUNCTIONS SORTED ON ...`)
//! 3. `Total time` - measurement
//!
//! Everything else is ignored. Matching happens on the raw line, so leading
//! whitespace prevents a match.

use std::num::ParseFloatError;

pub const SCRIPT_PREFIX: &str = "SCRIPT";
pub const FUNCTION_PREFIX: &str = "FUNCTI";
pub const MEASUREMENT_PREFIX: &str = "Total time";

/// Category of a single log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Script marker, carrying the trimmed line
    Script(&'a str),
    /// Function marker, carrying the trimmed line
    Function(&'a str),
    /// Measurement line, carrying the trimmed numeric text
    Measurement(&'a str),
    /// Line with no meaning to the report
    Other,
}

/// Classify one line by prefix
pub fn classify_line(line: &str) -> LineKind<'_> {
    if line.starts_with(SCRIPT_PREFIX) {
        LineKind::Script(line.trim())
    } else if line.starts_with(FUNCTION_PREFIX) {
        LineKind::Function(line.trim())
    } else if let Some(rest) = line.strip_prefix(MEASUREMENT_PREFIX) {
        LineKind::Measurement(measurement_text(rest))
    } else {
        LineKind::Other
    }
}

/// Drop the single separator character after the label, then trim
fn measurement_text(rest: &str) -> &str {
    let mut chars = rest.chars();
    chars.next();
    chars.as_str().trim()
}

/// Parse the numeric portion of a measurement line
pub fn parse_measurement(text: &str) -> Result<f64, ParseFloatError> {
    text.parse::<f64>()
}
