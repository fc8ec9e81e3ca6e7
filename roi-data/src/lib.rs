pub mod export;
pub mod param_file;

pub use export::{CsvWorkbookWriter, ExportError, Sheet, SheetKind, Workbook, WorkbookWriter};
pub use param_file::CsvParamStore;
