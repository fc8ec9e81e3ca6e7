use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, ValueEnum};
use thiserror::Error;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Rental property return-on-investment calculator.
///
/// Restores the session from a parameter file (if given), applies field
/// assignments, and prints every derived metric.
#[derive(Debug, Parser)]
#[command(name = "rental-roi", version)]
pub struct Cli {
    /// CSV parameter file to restore the session from and save it to.
    /// Without it the session only lives for this run.
    #[arg(long, value_name = "FILE")]
    pub params: Option<PathBuf>,

    /// Field assignment, e.g. `--set housingPrice=200000`. Repeatable;
    /// applied in order.
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub assignments: Vec<Assignment>,

    /// Unset every field (and clear the parameter file) before applying
    /// assignments.
    #[arg(long)]
    pub reset: bool,

    /// Write the workbook into this directory.
    #[arg(long, value_name = "DIR")]
    pub export: Option<PathBuf>,

    /// Report format on stdout.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Log verbosity. `RUST_LOG` takes precedence when set.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Also append log records to this file.
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Aligned text, one section per sheet.
    Text,
    /// `sheet,key,label,value` rows.
    Csv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_directive(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

// ─── assignments ─────────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseAssignmentError {
    #[error("expected KEY=VALUE, got '{0}'")]
    MissingEquals(String),

    #[error("empty field name in '{0}'")]
    EmptyKey(String),
}

/// One `KEY=VALUE` field assignment.
///
/// The key is kept as given; whether it names a field is decided by the
/// session. The value may be empty, which unsets the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub name: String,
    pub value: String,
}

impl FromStr for Assignment {
    type Err = ParseAssignmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = s
            .split_once('=')
            .ok_or_else(|| ParseAssignmentError::MissingEquals(s.to_string()))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(ParseAssignmentError::EmptyKey(s.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            value: value.to_string(),
        })
    }
}
