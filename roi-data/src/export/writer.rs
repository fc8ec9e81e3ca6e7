use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use super::{ExportError, Workbook};

/// Destination of an exported [`Workbook`].
pub trait WorkbookWriter {
    /// Writes every sheet of `workbook` and returns where it was written.
    fn write(
        &self,
        workbook: &Workbook,
    ) -> Result<PathBuf, ExportError>;
}

/// Writes a workbook as a directory named after the workbook, holding one
/// `<Sheet>.csv` file per sheet with a `key,label,value` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvWorkbookWriter {
    out_dir: PathBuf,
}

impl CsvWorkbookWriter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }
}

impl WorkbookWriter for CsvWorkbookWriter {
    fn write(
        &self,
        workbook: &Workbook,
    ) -> Result<PathBuf, ExportError> {
        let dir = self.out_dir.join(&workbook.name);
        fs::create_dir_all(&dir)?;

        for sheet in &workbook.sheets {
            let path = dir.join(format!("{}.csv", sheet.kind.name()));
            let mut writer = csv::Writer::from_path(&path)?;
            for row in &sheet.rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
            debug!(path = %path.display(), rows = sheet.rows.len(), "sheet written");
        }

        info!(path = %dir.display(), "workbook exported");
        Ok(dir)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use roi_core::{FieldKey, InputRecord, derive_all};

    use super::*;
    use crate::export::SheetKind;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("roi-data-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn workbook() -> Workbook {
        let record = InputRecord::new()
            .with_field(FieldKey::HousingPrice, "200000")
            .with_field(FieldKey::Rent, "1000");
        let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        Workbook::build(&record, &derive_all(&record), date)
    }

    #[test]
    fn write_creates_one_file_per_sheet() {
        let out = scratch_dir("writer-files");
        let writer = CsvWorkbookWriter::new(&out);

        let dir = writer.write(&workbook()).unwrap();

        assert_eq!(dir, out.join("rental-roi-2024-01-31"));
        for kind in SheetKind::all() {
            assert!(dir.join(format!("{}.csv", kind.name())).is_file());
        }
        fs::remove_dir_all(&out).unwrap();
    }

    #[test]
    fn sheet_file_has_header_and_rows() {
        let out = scratch_dir("writer-rows");
        let writer = CsvWorkbookWriter::new(&out);

        let dir = writer.write(&workbook()).unwrap();
        let text = fs::read_to_string(dir.join("Purchase.csv")).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "key,label,value");
        assert_eq!(lines[1], "housingPrice,Housing price,200000");
        assert_eq!(lines[4], "totalPurchasePrice,Total purchase price,200000");
        fs::remove_dir_all(&out).unwrap();
    }

    #[test]
    fn write_overwrites_previous_export() {
        let out = scratch_dir("writer-twice");
        let writer = CsvWorkbookWriter::new(&out);

        writer.write(&workbook()).unwrap();
        let dir = writer.write(&workbook()).unwrap();
        let text = fs::read_to_string(dir.join("Results.csv")).unwrap();

        assert_eq!(text.lines().count(), 4);
        fs::remove_dir_all(&out).unwrap();
    }
}
