//! CSV file reading into header-aligned string records.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// A CSV file read as strings: header plus rows padded to the header width.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    /// Column names with surrounding whitespace and any BOM removed.
    pub headers: Vec<String>,
    /// Raw cell values, one vector per data row.
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Returns true if the header contains `column`.
    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|header| header == column)
    }

    /// Fails with [`IngestError::MissingColumn`] unless `column` is present.
    pub fn require_column(&self, column: &str, path: &Path) -> Result<()> {
        if self.has_column(column) {
            Ok(())
        } else {
            Err(IngestError::MissingColumn {
                column: column.to_string(),
                path: path.to_path_buf(),
            })
        }
    }

    /// Iterate rows as `(column, value)` pairs.
    pub fn records(&self) -> impl Iterator<Item = impl Iterator<Item = (&str, &str)>> {
        self.rows.iter().map(|row| {
            self.headers
                .iter()
                .map(String::as_str)
                .zip(row.iter().map(String::as_str))
        })
    }
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = open(path)?;

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read >= 2 {
        // UTF-16 LE BOM
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        // UTF-16 BE BOM
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    // UTF-8 BOM is acceptable (stripped from the first header)
    Ok(())
}

/// Trimmed header name; blank names become `Unnamed: <index>`.
fn header_name(index: usize, raw: &str) -> String {
    let name = raw.trim_matches('\u{feff}').trim();
    if name.is_empty() {
        format!("Unnamed: {index}")
    } else {
        name.to_string()
    }
}

/// Reads a CSV file with a single header row.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    validate_encoding(path)?;
    let file = open(path)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);
    let csv_error = |source| IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    };

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .enumerate()
        .map(|(index, name)| header_name(index, name))
        .collect();
    if headers.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let mut row: Vec<String> = record.iter().map(ToString::to_string).collect();
        row.resize(headers.len(), String::new());
        rows.push(row);
    }

    tracing::debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "read CSV table"
    );

    Ok(CsvTable { headers, rows })
}
