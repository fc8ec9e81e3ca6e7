use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use roi_core::{MemoryParamStore, ParamStore, Session};
use roi_data::{CsvParamStore, CsvWorkbookWriter, Workbook, WorkbookWriter};
use tracing::{debug, info};

use crate::config::Cli;
use crate::report;

/// What a run produced.
#[derive(Debug)]
pub struct Outcome {
    pub report: String,
    /// Directory of the exported workbook, when an export was requested.
    pub exported: Option<PathBuf>,
}

/// The store a session persists to: the parameter file when one is given,
/// memory otherwise.
pub fn open_store(params: Option<&Path>) -> Box<dyn ParamStore> {
    match params {
        Some(path) => {
            debug!(path = %path.display(), "using parameter file");
            Box::new(CsvParamStore::new(path))
        }
        None => Box::new(MemoryParamStore::new()),
    }
}

/// Runs one session as described by `cli`, exporting with `today` as the
/// workbook date.
///
/// # Errors
///
/// Fails on an assignment to an unknown field (fields assigned before it
/// are kept) or when the workbook cannot be written. Parameter file
/// problems are logged and never fail the run.
pub fn run(
    cli: &Cli,
    today: NaiveDate,
) -> Result<Outcome> {
    let mut session = Session::load(open_store(cli.params.as_deref()));

    if cli.reset {
        session.reset();
    }
    for assignment in &cli.assignments {
        session.set_field_by_name(&assignment.name, assignment.value.as_str())?;
    }

    let derived = session.derived();
    debug!("derived metrics:\n{derived}");

    let workbook = Workbook::build(session.record(), &derived, today);
    let exported = cli
        .export
        .as_deref()
        .map(|dir| {
            CsvWorkbookWriter::new(dir)
                .write(&workbook)
                .with_context(|| format!("failed to export workbook to '{}'", dir.display()))
        })
        .transpose()?;

    let report = report::render(&workbook, cli.format)?;
    info!(fields_set = cli.assignments.len(), "run complete");

    Ok(Outcome { report, exported })
}
