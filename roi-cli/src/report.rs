//! Report printed on stdout, laid out like the exported workbook.

use std::fmt;

use anyhow::Result;
use roi_data::Workbook;

use crate::config::ReportFormat;

pub fn render(
    workbook: &Workbook,
    format: ReportFormat,
) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(TextReport(workbook).to_string()),
        ReportFormat::Csv => render_csv(workbook),
    }
}

/// One section per sheet, values right-aligned.
struct TextReport<'a>(&'a Workbook);

impl fmt::Display for TextReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for (position, sheet) in self.0.sheets.iter().enumerate() {
            if position > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", sheet.kind.name())?;
            for row in &sheet.rows {
                writeln!(f, "  {:<26}{:>12}", row.label, row.value)?;
            }
        }
        Ok(())
    }
}

fn render_csv(workbook: &Workbook) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["sheet", "key", "label", "value"])?;
    for sheet in &workbook.sheets {
        for row in &sheet.rows {
            writer.write_record([sheet.kind.name(), row.key, row.label, row.value.as_str()])?;
        }
    }
    let bytes = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(String::from_utf8(bytes)?)
}
