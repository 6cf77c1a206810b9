//! Measured entries and their ordering

use std::cmp::Ordering;

/// Which marker a measurement was attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryGroup {
    Script,
    Function,
}

impl EntryGroup {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryGroup::Script => "script",
            EntryGroup::Function => "function",
        }
    }
}

/// A single `(label, total time)` measurement
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// Trimmed marker line, e.g. `SCRIPT  /usr/share/vim/syntax.vim`
    pub label: String,
    /// Total time in seconds as written in the log
    pub total_time_secs: f64,
}

impl LogEntry {
    pub fn new(label: impl Into<String>, total_time_secs: f64) -> Self {
        Self {
            label: label.into(),
            total_time_secs,
        }
    }
}

/// Descending order on total time.
///
/// `-0.0` is folded into `0.0` so signed zeros tie, and NaN ranks above
/// every number. The result is a total order.
fn by_time_desc(a: &LogEntry, b: &LogEntry) -> Ordering {
    sort_key(b.total_time_secs).total_cmp(&sort_key(a.total_time_secs))
}

fn sort_key(secs: f64) -> f64 {
    if secs.is_nan() {
        f64::NAN.abs()
    } else {
        secs + 0.0
    }
}

/// Sort entries by total time, largest first. Ties keep insertion order.
pub fn sort_entries(entries: &mut [LogEntry]) {
    entries.sort_by(by_time_desc);
}
