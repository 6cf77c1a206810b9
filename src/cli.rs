//! CLI argument parsing for proflog

use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

/// Output format for the report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text format (default)
    #[default]
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "proflog")]
#[command(version)]
#[command(
    about = "Report script and function total times from a profiling log",
    long_about = None
)]
pub struct Cli {
    /// Profile log to read (default: profile.log)
    #[arg(value_name = "LOG")]
    pub log: Option<PathBuf>,

    /// Output format (default: text)
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// TOML file with report defaults
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print debug logging to stderr
    #[arg(long)]
    pub debug: bool,
}
