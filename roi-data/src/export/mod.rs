//! Spreadsheet export of a calculation.
//!
//! A [`Workbook`] is a plain tabular view of one session: its inputs and
//! every derived metric, spread over four sheets.
//!
//! | Sheet      | Inputs                          | Metrics |
//! |------------|---------------------------------|---------|
//! | `Purchase` | housing price, notary fees, works | total purchase price |
//! | `Mortgage` | loan, rate, period              | monthly payment, total interest, total cost, down payment |
//! | `Rental`   | rent, charges, property tax     | net monthly income |
//! | `Results`  |                                 | gross yield, net yield, monthly cashflow |
//!
//! Cells hold bare numbers. Currency metrics are taken from their displayed
//! text with every formatting character stripped; percentages keep their two
//! decimals. Inputs are written as the number they parse to, so an invalid
//! input shows as `0`, exactly as the calculations saw it.
//!
//! The workbook is named after the export date: `rental-roi-YYYY-MM-DD`.

mod writer;

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use roi_core::calculations::Precision;
use roi_core::{DerivedResult, FieldGroup, FieldKey, InputRecord, Metric};
use serde::Serialize;
use thiserror::Error;

pub use writer::{CsvWorkbookWriter, WorkbookWriter};

/// Prefix of every exported workbook name.
pub const WORKBOOK_PREFIX: &str = "rental-roi";

static FORMATTING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9]").expect("formatting pattern is valid"));

/// Errors that can occur while writing a workbook.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

/// The four sheets of an exported workbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SheetKind {
    Purchase,
    Mortgage,
    Rental,
    Results,
}

impl SheetKind {
    pub fn all() -> &'static [SheetKind] {
        &[
            SheetKind::Purchase,
            SheetKind::Mortgage,
            SheetKind::Rental,
            SheetKind::Results,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Purchase => "Purchase",
            Self::Mortgage => "Mortgage",
            Self::Rental => "Rental",
            Self::Results => "Results",
        }
    }

    /// Input fields shown on this sheet.
    pub fn group(&self) -> Option<FieldGroup> {
        match self {
            Self::Purchase => Some(FieldGroup::Acquisition),
            Self::Mortgage => Some(FieldGroup::Financing),
            Self::Rental => Some(FieldGroup::Rental),
            Self::Results => None,
        }
    }

    /// Metrics shown on this sheet.
    pub fn metrics(&self) -> &'static [Metric] {
        match self {
            Self::Purchase => &[Metric::TotalPurchasePrice],
            Self::Mortgage => &[
                Metric::MonthlyMortgagePayment,
                Metric::TotalMortgageInterest,
                Metric::TotalMortgageCost,
                Metric::DownPayment,
            ],
            Self::Rental => &[Metric::NetMonthlyIncome],
            Self::Results => &[Metric::GrossYield, Metric::NetYield, Metric::MonthlyCashflow],
        }
    }
}

/// One line of a sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sheet {
    pub kind: SheetKind,
    pub rows: Vec<Row>,
}

impl Sheet {
    /// Value of the row with the given key.
    pub fn value(
        &self,
        key: &str,
    ) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.key == key)
            .map(|row| row.value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Workbook {
    pub name: String,
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    /// Lays out `record` and `derived` as a workbook exported on `date`.
    pub fn build(
        record: &InputRecord,
        derived: &DerivedResult,
        date: NaiveDate,
    ) -> Self {
        let sheets = SheetKind::all()
            .iter()
            .map(|kind| {
                let inputs = kind
                    .group()
                    .into_iter()
                    .flat_map(|group| group.fields())
                    .map(|key| input_row(record, key));
                let metrics = kind.metrics().iter().map(|metric| metric_row(derived, *metric));
                Sheet {
                    kind: *kind,
                    rows: inputs.chain(metrics).collect(),
                }
            })
            .collect();

        Self {
            name: workbook_name(date),
            sheets,
        }
    }

    pub fn sheet(
        &self,
        kind: SheetKind,
    ) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.kind == kind)
    }
}

/// `rental-roi-YYYY-MM-DD` for the given date.
pub fn workbook_name(date: NaiveDate) -> String {
    format!("{WORKBOOK_PREFIX}-{}", date.format("%Y-%m-%d"))
}

/// Strips every formatting character from a displayed currency amount,
/// keeping only the digits and a leading minus sign.
///
/// # Examples
///
/// ```
/// use roi_data::export::deformat_currency;
///
/// assert_eq!(deformat_currency("226 000 €"), "226000");
/// assert_eq!(deformat_currency("-1,044"), "-1044");
/// assert_eq!(deformat_currency(""), "0");
/// ```
pub fn deformat_currency(displayed: &str) -> String {
    let digits = FORMATTING.replace_all(displayed, "");
    if digits.is_empty() {
        "0".to_string()
    } else if displayed.trim_start().starts_with('-') {
        format!("-{digits}")
    } else {
        digits.into_owned()
    }
}

fn input_row(
    record: &InputRecord,
    key: FieldKey,
) -> Row {
    Row {
        key: key.as_str(),
        label: key.label(),
        value: record.operand(key).or_zero().normalize().to_string(),
    }
}

fn metric_row(
    derived: &DerivedResult,
    metric: Metric,
) -> Row {
    let displayed = derived.display(metric);
    let value = match metric.precision() {
        Precision::Currency => deformat_currency(&displayed),
        Precision::Percent => displayed,
    };
    Row {
        key: metric.as_str(),
        label: metric.label(),
        value,
    }
}
