//! CSV decoding into [`Row`]s and encoding back out.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};

use crate::core::Row;
use crate::{SplitError, SplitResult};

const BOM: char = '\u{feff}';

fn clean_headers(record: &StringRecord) -> Vec<String> {
    record
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if i == 0 {
                h.trim_start_matches(BOM).to_string()
            } else {
                h.to_string()
            }
        })
        .collect()
}

/// Streaming, relaxed CSV reader.
///
/// Headers and fields are whitespace-trimmed, rows may carry more or fewer
/// fields than the header, and a leading UTF-8 BOM is dropped.
pub struct RowReader<R> {
    path: PathBuf,
    reader: csv::Reader<R>,
    headers: Vec<String>,
    record: StringRecord,
}

impl RowReader<File> {
    /// Open a CSV file and read its header row.
    pub fn open(path: &Path) -> SplitResult<Self> {
        let file = File::open(path).map_err(|e| SplitError::io(path, e))?;
        RowReader::from_reader(path, file)
    }
}

impl<R: Read> RowReader<R> {
    /// Wrap any reader. `path` only labels errors.
    pub fn from_reader(path: &Path, reader: R) -> SplitResult<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);
        let headers = clean_headers(reader.headers().map_err(|e| SplitError::csv(path, e))?);
        Ok(RowReader {
            path: path.to_path_buf(),
            reader,
            headers,
            record: StringRecord::new(),
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

impl<R: Read> Iterator for RowReader<R> {
    type Item = SplitResult<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(true) => Some(Ok(Row::from_record(
                self.headers.iter().map(String::as_str),
                self.record.iter(),
            ))),
            Ok(false) => None,
            Err(e) => Some(Err(SplitError::csv(&self.path, e))),
        }
    }
}

/// CSV writer with a fixed header row.
pub struct RowWriter<W: Write> {
    path: PathBuf,
    writer: csv::Writer<W>,
    headers: Vec<String>,
}

impl RowWriter<File> {
    /// Create (or truncate) `path` and write the header row.
    pub fn create(path: &Path, headers: Vec<String>) -> SplitResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| SplitError::io(parent, e))?;
            }
        }
        let file = File::create(path).map_err(|e| SplitError::io(path, e))?;
        RowWriter::from_writer(path, file, headers)
    }
}

impl<W: Write> RowWriter<W> {
    pub fn from_writer(path: &Path, writer: W, headers: Vec<String>) -> SplitResult<Self> {
        let mut writer = WriterBuilder::new().flexible(false).from_writer(writer);
        writer
            .write_record(&headers)
            .map_err(|e| SplitError::csv(path, e))?;
        Ok(RowWriter {
            path: path.to_path_buf(),
            writer,
            headers,
        })
    }

    pub fn write_row(&mut self, row: &Row) -> SplitResult<()> {
        self.writer
            .write_record(row.to_record(&self.headers))
            .map_err(|e| SplitError::csv(&self.path, e))
    }

    /// Flush buffered output and hand back the inner writer.
    pub fn finish(self) -> SplitResult<W> {
        let path = self.path;
        self.writer
            .into_inner()
            .map_err(|e| SplitError::io(&path, e.into_error()))
    }
}

/// Load a whole CSV document, preserving values byte-for-byte.
///
/// Unlike [`RowReader`] this is strict: every record must match the
/// header width.
pub fn read_all(path: &Path) -> SplitResult<(Vec<String>, Vec<Row>)> {
    let file = File::open(path).map_err(|e| SplitError::io(path, e))?;
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);
    let headers = clean_headers(reader.headers().map_err(|e| SplitError::csv(path, e))?);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| SplitError::csv(path, e))?;
        rows.push(Row::from_record(headers.iter().map(String::as_str), record.iter()));
    }
    Ok((headers, rows))
}

/// Write a whole CSV document in one go.
pub fn write_all(path: &Path, headers: Vec<String>, rows: &[Row]) -> SplitResult<()> {
    let mut writer = RowWriter::create(path, headers)?;
    for row in rows {
        writer.write_row(row)?;
    }
    writer.finish()?;
    Ok(())
}
