//! Parameter file store.
//!
//! A session's parameter map persisted as a two-column CSV file, so that a
//! calculation can be shared as a file and restored later.
//!
//! ## CSV Format
//!
//! | Column  | Type   | Notes                                         |
//! |---------|--------|-----------------------------------------------|
//! | `key`   | string | Field wire name, e.g. `housingPrice`          |
//! | `value` | string | Raw field value; an empty cell means unset    |
//!
//! Rows are written in field order. When reading, whitespace around keys is
//! ignored while values are kept exactly as written, a key given twice keeps
//! its last value, and keys that are not field names are passed through (the
//! session ignores them on hydration).
//!
//! Saving writes a sibling `<name>.tmp` file and renames it over the
//! parameter file, so a failed save leaves the previous file in place.
//!
//! ### Example
//!
//! ```csv
//! key,value
//! housingPrice,200000
//! notaryFees,16000
//! houseWorks,
//! ```

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use roi_core::{FieldKey, ParamMap, ParamStore, StoreError};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize, Deserialize)]
struct ParamRow {
    key: String,
    value: String,
}

fn csv_error(err: csv::Error) -> StoreError {
    StoreError::Csv(err.to_string())
}

/// [`ParamStore`] backed by a CSV file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvParamStore {
    path: PathBuf,
}

impl CsvParamStore {
    /// A store persisting to `path`. The file does not need to exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file a save is staged in before replacing the parameter file.
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Parse a parameter map from CSV text.
    ///
    /// # Errors
    ///
    /// * [`StoreError::Csv`] if the CSV is structurally invalid.
    /// * [`StoreError::Malformed`] if a row has an empty key. The message
    ///   carries the 1-based row number.
    pub fn read<R: Read>(reader: R) -> Result<ParamMap, StoreError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .flexible(false)
            .from_reader(reader);

        let mut params = ParamMap::new();
        for (idx, result) in reader.deserialize::<ParamRow>().enumerate() {
            let row = result.map_err(csv_error)?;
            let key = row.key.trim();
            if key.is_empty() {
                return Err(StoreError::Malformed(format!("empty key on row {}", idx + 1)));
            }
            params.insert(key.to_string(), row.value);
        }
        Ok(params)
    }

    /// Write `params` as CSV: field keys first in field order, then any other
    /// key in alphabetical order.
    pub fn write<W: Write>(
        writer: W,
        params: &ParamMap,
    ) -> Result<(), StoreError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        writer.write_record(["key", "value"]).map_err(csv_error)?;

        let known = FieldKey::all()
            .iter()
            .filter_map(|key| params.get_key_value(key.as_str()));
        let extra = params
            .iter()
            .filter(|(name, _)| FieldKey::parse(name).is_none());

        for (key, value) in known.chain(extra) {
            writer
                .serialize(ParamRow {
                    key: key.clone(),
                    value: value.clone(),
                })
                .map_err(csv_error)?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl ParamStore for CsvParamStore {
    fn load(&self) -> Result<ParamMap, StoreError> {
        match File::open(&self.path) {
            Ok(file) => {
                debug!(path = %self.path.display(), "reading parameter file");
                Self::read(file)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(ParamMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn save(
        &mut self,
        params: &ParamMap,
    ) -> Result<(), StoreError> {
        let staging = self.staging_path();
        let written = File::create(&staging)
            .map_err(StoreError::from)
            .and_then(|file| Self::write(file, params))
            .and_then(|()| fs::rename(&staging, &self.path).map_err(StoreError::from));
        if written.is_err() {
            let _ = fs::remove_file(&staging);
        }
        written?;
        debug!(path = %self.path.display(), "parameter file saved");
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
