use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;

use super::model::{SeriesDataset, WaterSample, ALL_COLUMNS, DATE_COLUMN};

/// Date layout in the artifact: ISO-8601 calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures when reloading the persisted artifact.
///
/// `NotFound` is recoverable for a caller that still holds the in-memory
/// dataset; the parse variants are fatal for the summarization step.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("artifact not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: expected header {expected:?}, found {found:?}")]
    Header {
        path: PathBuf,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("{path}: row {row}, column {column}: cannot parse {value:?}")]
    Parse {
        path: PathBuf,
        row: usize,
        column: String,
        value: String,
    },

    #[error("{path}: malformed CSV: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load the tabular artifact back into a [`SeriesDataset`].
///
/// The header must be exactly `Date,Temperature,pH,cod`. `Date` cells are
/// parsed into calendar dates, numeric cells into `f64`; an empty numeric
/// cell becomes a missing value.
pub fn load_csv(path: &Path) -> Result<SeriesDataset, ArtifactError> {
    let file = std::fs::File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ArtifactError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ArtifactError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let mut reader = csv::Reader::from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| ArtifactError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?
        .iter()
        .map(|h| h.to_string())
        .collect();
    if headers != ALL_COLUMNS {
        return Err(ArtifactError::Header {
            path: path.to_path_buf(),
            expected: ALL_COLUMNS.iter().map(|c| c.to_string()).collect(),
            found: headers,
        });
    }

    let mut samples = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let row = i + 1; // 1-based data row, header excluded
        let record = result.map_err(|e| ArtifactError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;

        let date = parse_date(path, row, record.get(0).unwrap_or(""))?;
        let temperature = parse_cell(path, row, "Temperature", record.get(1).unwrap_or(""))?;
        let ph = parse_cell(path, row, "pH", record.get(2).unwrap_or(""))?;
        let cod = parse_cell(path, row, "cod", record.get(3).unwrap_or(""))?;

        samples.push(WaterSample {
            date,
            temperature,
            ph,
            cod,
        });
    }

    Ok(SeriesDataset::new(samples))
}

fn parse_date(path: &Path, row: usize, value: &str) -> Result<NaiveDate, ArtifactError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ArtifactError::Parse {
        path: path.to_path_buf(),
        row,
        column: DATE_COLUMN.to_string(),
        value: value.to_string(),
    })
}

fn parse_cell(
    path: &Path,
    row: usize,
    column: &str,
    value: &str,
) -> Result<Option<f64>, ArtifactError> {
    if value.is_empty() {
        return Ok(None);
    }
    value
        .trim()
        .parse::<f64>()
        .map(Some)
        .map_err(|_| ArtifactError::Parse {
            path: path.to_path_buf(),
            row,
            column: column.to_string(),
            value: value.to_string(),
        })
}
