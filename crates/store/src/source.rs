//! CSV title source
//!
//! Titles arrive as one column of a CSV export of contract records. Records
//! are read flexibly (rows may differ in width); a row too short to hold the
//! title column is skipped and counted rather than failing the run.

use csv::{Reader, ReaderBuilder, StringRecord};
use keyword_core::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::warn;

/// Iterator over the title column of a CSV file
pub struct CsvTitleSource<R> {
    reader: Reader<R>,
    record: StringRecord,
    field: usize,
    rows: u64,
    skipped: u64,
}

impl CsvTitleSource<File> {
    /// Open a CSV file and read column `field` (zero-based) of every record.
    pub fn open(path: impl AsRef<Path>, field: usize, has_headers: bool) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            Error::IoError(std::io::Error::new(
                e.kind(),
                format!("failed to open '{}': {}", path.display(), e),
            ))
        })?;
        Ok(Self::from_reader(file, field, has_headers))
    }
}

impl<R: Read> CsvTitleSource<R> {
    /// Read titles from any byte stream.
    pub fn from_reader(rdr: R, field: usize, has_headers: bool) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(has_headers)
            .flexible(true)
            .from_reader(rdr);
        Self {
            reader,
            record: StringRecord::new(),
            field,
            rows: 0,
            skipped: 0,
        }
    }

    /// Records read so far, including skipped ones
    pub fn rows_read(&self) -> u64 {
        self.rows
    }

    /// Records without the title column
    pub fn skipped_rows(&self) -> u64 {
        self.skipped
    }
}

impl<R: Read> Iterator for CsvTitleSource<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.reader.read_record(&mut self.record) {
                Ok(true) => {}
                Ok(false) => return None,
                Err(e) => return Some(Err(e.into())),
            }
            self.rows += 1;

            match self.record.get(self.field) {
                Some(title) => return Some(Ok(title.to_string())),
                None => {
                    self.skipped += 1;
                    warn!(
                        target: "ckw::extract",
                        row = self.rows,
                        field = self.field,
                        width = self.record.len(),
                        "Row has no title column, skipping"
                    );
                }
            }
        }
    }
}
