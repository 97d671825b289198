//! Descriptive statistics.
//!
//! Per-column count, mean, standard deviation, extrema, and quartiles with
//! the usual tabular-analysis semantics: sample standard deviation
//! (denominator n − 1) and linear-interpolation quantiles, computed over
//! non-null cells only.

use super::StatsError;
use crate::data::model::{SeriesDataset, ALL_COLUMNS, DATE_COLUMN, NUMERIC_COLUMNS};

// ---------------------------------------------------------------------------
// ColumnSummary
// ---------------------------------------------------------------------------

/// Descriptive statistics for one numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub column: String,
    /// Number of non-null cells.
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n − 1); NaN when fewer than 2 values.
    pub std_dev: f64,
    pub min: f64,
    /// 25% quantile, linear interpolation.
    pub q1: f64,
    /// 50% quantile.
    pub median: f64,
    /// 75% quantile.
    pub q3: f64,
    pub max: f64,
}

/// Compute descriptive statistics for one column.
///
/// Fails with `ColumnNotFound` for an unknown column name and with
/// `EmptyDataset` when the column holds no non-null values.
pub fn describe(dataset: &SeriesDataset, column: &str) -> Result<ColumnSummary, StatsError> {
    let values = dataset
        .column_values(column)
        .ok_or_else(|| StatsError::ColumnNotFound(column.to_string()))?;
    if values.is_empty() {
        return Err(StatsError::EmptyDataset);
    }

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    let std_dev = if count < 2 {
        f64::NAN
    } else {
        let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        (sum_sq / (count - 1) as f64).sqrt()
    };

    let mut sorted = values;
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    Ok(ColumnSummary {
        column: column.to_string(),
        count,
        mean,
        std_dev,
        min: sorted[0],
        q1: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q3: quantile(&sorted, 0.75),
        max: sorted[count - 1],
    })
}

/// Descriptive statistics for every numeric column, in column order.
pub fn describe_all(dataset: &SeriesDataset) -> Result<Vec<ColumnSummary>, StatsError> {
    NUMERIC_COLUMNS
        .iter()
        .map(|col| describe(dataset, col))
        .collect()
}

// ---------------------------------------------------------------------------
// Null counts
// ---------------------------------------------------------------------------

/// Count of missing cells per column, in column order.
///
/// Computed generically over every cell; the date column is structurally
/// never missing but is still reported.
pub fn null_counts(dataset: &SeriesDataset) -> Vec<(String, usize)> {
    ALL_COLUMNS
        .iter()
        .map(|&col| {
            let nulls = if col == DATE_COLUMN {
                0
            } else {
                dataset
                    .column_cells(col)
                    .expect("fixed numeric column")
                    .iter()
                    .filter(|c| c.is_none())
                    .count()
            };
            (col.to_string(), nulls)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Quantiles
// ---------------------------------------------------------------------------

/// Linear-interpolation quantile over already sorted, non-empty data.
///
/// Index h = (n − 1)·q; the result interpolates between the two surrounding
/// order statistics.
pub(crate) fn quantile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    let h = (n - 1) as f64 * q;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
    }
}
