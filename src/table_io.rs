//! CSV persistence for tables and the attention matrix
//!
//! Tables are written with the header taken from [`crate::schema`] and read
//! back only if the header on disk matches it exactly.

use crate::matrix::{AttentionMatrix, MatrixError};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading or writing dataset files
#[derive(Error, Debug)]
pub enum TableIoError {
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Header of {} is [{found}], expected [{expected}]", .path.display())]
    HeaderMismatch {
        path: PathBuf,
        expected: String,
        found: String,
    },

    #[error("Invalid number '{value}' in {} at row {row}", .path.display())]
    InvalidNumber {
        path: PathBuf,
        row: usize,
        value: String,
    },

    #[error("Invalid attention matrix in {}: {source}", .path.display())]
    Matrix {
        path: PathBuf,
        #[source]
        source: MatrixError,
    },
}

type Result<T> = core::result::Result<T, TableIoError>;

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> TableIoError + '_ {
    move |source| TableIoError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn csv_error(path: &Path) -> impl FnOnce(csv::Error) -> TableIoError + '_ {
    move |source| TableIoError::Csv {
        path: path.to_path_buf(),
        source,
    }
}

/// Formats a float the way the table serializer does: shortest round-trip
/// digits, always with a fractional part (`0.2`, `1.0`).
pub fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Writes `rows` to `path` as CSV, preceded by `header`.
///
/// Any existing file is overwritten.
///
/// # Arguments
/// * `path` - Destination file
/// * `header` - Column names, in the order the row type serializes its fields
/// * `rows` - Records to write
pub fn write_table<T: Serialize>(path: &Path, header: &[&str], rows: &[T]) -> Result<()> {
    let file = File::create(path).map_err(io_error(path))?;
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    writer.write_record(header).map_err(csv_error(path))?;
    for row in rows {
        writer.serialize(row).map_err(csv_error(path))?;
    }

    writer.flush().map_err(io_error(path))
}

/// Reads every row of the CSV file at `path`, requiring its header to equal `header`.
pub fn read_table<T: DeserializeOwned>(path: &Path, header: &[&str]) -> Result<Vec<T>> {
    let file = File::open(path).map_err(io_error(path))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::new(file));

    let found = reader.headers().map_err(csv_error(path))?.clone();
    check_header(path, header, &found)?;

    reader
        .deserialize()
        .map(|row| row.map_err(csv_error(path)))
        .collect()
}

/// Writes the attention matrix with its pathway index as the first, unnamed column.
pub fn write_matrix(path: &Path, matrix: &AttentionMatrix) -> Result<()> {
    let file = File::create(path).map_err(io_error(path))?;
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    let mut header = vec![String::new()];
    header.extend(matrix.categories().iter().cloned());
    writer.write_record(&header).map_err(csv_error(path))?;

    for (pathway, weights) in matrix.pathways().iter().zip(matrix.rows()) {
        let mut record = vec![pathway.clone()];
        record.extend(weights.iter().map(|&w| format_float(w)));
        writer.write_record(&record).map_err(csv_error(path))?;
    }

    writer.flush().map_err(io_error(path))
}

/// Reads an attention matrix written by [`write_matrix`].
///
/// `header` is the full expected header, including the leading empty index cell.
pub fn read_matrix(path: &Path, header: &[&str]) -> Result<AttentionMatrix> {
    let file = File::open(path).map_err(io_error(path))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::new(file));

    let found = reader.headers().map_err(csv_error(path))?.clone();
    check_header(path, header, &found)?;

    let categories: Vec<String> = found.iter().skip(1).map(str::to_string).collect();
    let mut pathways = Vec::new();
    let mut weights = Vec::new();

    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(csv_error(path))?;
        let mut fields = record.iter();
        pathways.push(fields.next().unwrap_or_default().to_string());

        let row = fields
            .map(|value| {
                value.parse::<f64>().map_err(|_| TableIoError::InvalidNumber {
                    path: path.to_path_buf(),
                    row: index + 1,
                    value: value.to_string(),
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        weights.push(row);
    }

    AttentionMatrix::new(pathways, categories, weights).map_err(|source| TableIoError::Matrix {
        path: path.to_path_buf(),
        source,
    })
}

fn check_header(path: &Path, expected: &[&str], found: &StringRecord) -> Result<()> {
    if found.iter().eq(expected.iter().copied()) {
        return Ok(());
    }

    Err(TableIoError::HeaderMismatch {
        path: path.to_path_buf(),
        expected: expected.join(","),
        found: found.iter().collect::<Vec<_>>().join(","),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::PerformanceRecord;
    use crate::schema::PERFORMANCE_HEADER;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    fn sample_rows() -> Vec<PerformanceRecord> {
        vec![
            PerformanceRecord {
                dataset: "DAVIS".into(),
                method: "DeepDTA".into(),
                auc_roc: 0.833,
                aupr: 0.718,
            },
            PerformanceRecord {
                dataset: "DAVIS".into(),
                method: "Ours".into(),
                auc_roc: 0.912,
                aupr: 0.817,
            },
        ]
    }

    #[rstest(value, expected,
        case(0.0, "0.0"),
        case(100.0, "100.0"),
        case(0.852, "0.852"),
        case(0.2, "0.2"),
        case(43.6, "43.6")
    )]
    fn test_floats_keep_a_fraction(value: f64, expected: &str) {
        assert_eq!(format_float(value), expected);
    }

    #[test]
    fn test_table_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("performance.csv");
        let rows = sample_rows();

        write_table(&path, &PERFORMANCE_HEADER, &rows).unwrap();
        let read: Vec<PerformanceRecord> = read_table(&path, &PERFORMANCE_HEADER).unwrap();

        assert_eq!(read, rows);
    }

    #[test]
    fn test_written_text_is_plain_csv() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("performance.csv");

        write_table(&path, &PERFORMANCE_HEADER, &sample_rows()).unwrap();
        let text = fs::read_to_string(&path).unwrap();

        assert_eq!(
            text,
            "Dataset,Method,AUC_ROC,AUPR\nDAVIS,DeepDTA,0.833,0.718\nDAVIS,Ours,0.912,0.817\n"
        );
    }

    #[test]
    fn test_header_mismatch_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("performance.csv");
        fs::write(&path, "Dataset,Model,AUC_ROC,AUPR\nDAVIS,Ours,0.9,0.8\n").unwrap();

        let result: Result<Vec<PerformanceRecord>> = read_table(&path, &PERFORMANCE_HEADER);
        assert!(matches!(result, Err(TableIoError::HeaderMismatch { ref found, .. }) if found.contains("Model")));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.csv");

        let result: Result<Vec<PerformanceRecord>> = read_table(&path, &PERFORMANCE_HEADER);
        assert!(matches!(result, Err(TableIoError::Io { .. })));
    }

    #[test]
    fn test_matrix_round_trips_with_index_column() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("attention.csv");
        let matrix = AttentionMatrix::new(
            vec!["MAPK".into(), "p53".into()],
            vec!["Cancer".into(), "Cardiovascular".into()],
            vec![vec![0.82, 0.3], vec![0.78, 0.2]],
        )
        .unwrap();

        write_matrix(&path, &matrix).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, ",Cancer,Cardiovascular\nMAPK,0.82,0.3\np53,0.78,0.2\n");

        let read = read_matrix(&path, &["", "Cancer", "Cardiovascular"]).unwrap();
        assert_eq!(read, matrix);
    }

    #[test]
    fn test_matrix_rejects_non_numeric_cells() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("attention.csv");
        fs::write(&path, ",Cancer\nMAPK,high\n").unwrap();

        let result = read_matrix(&path, &["", "Cancer"]);
        assert!(matches!(result, Err(TableIoError::InvalidNumber { row: 1, .. })));
    }
}
