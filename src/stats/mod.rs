/// Summary analysis over a [`SeriesDataset`](crate::data::model::SeriesDataset).
///
/// Every operation is a pure function of the dataset: no mutation, no
/// memoization. Validation failures surface as [`StatsError`] instead of
/// silently producing defaults.
///
/// Submodules:
/// - `describe` — per-column descriptive statistics and null counts
/// - `correlation` — Pearson r and the pairwise correlation matrix
/// - `distribution` — histogram buckets, box-plot summaries, scatter pairs
pub mod correlation;
pub mod describe;
pub mod distribution;

use thiserror::Error;

/// Validation failures of the summary operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    /// The requested column is not part of the dataset.
    #[error("column not found: {0}")]
    ColumnNotFound(String),

    /// The dataset (or the requested column) holds no values, so the
    /// statistic is undefined.
    #[error("dataset is empty: statistic is undefined")]
    EmptyDataset,

    /// Histogram bucketing needs at least one bin.
    #[error("bin count must be at least 1")]
    InvalidBinCount,
}
