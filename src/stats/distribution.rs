//! Distribution analysis.
//!
//! Equal-width histogram buckets, box-plot summaries, and scatter-pair
//! extraction; the plot-feeding half of the analyzer.

use super::describe::quantile;
use super::StatsError;
use crate::data::model::SeriesDataset;

// ---------------------------------------------------------------------------
// Histogram buckets
// ---------------------------------------------------------------------------

/// Equal-width histogram of one column.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBuckets {
    pub column: String,
    /// Bin edges, length `counts.len() + 1`; the first edge is the column
    /// minimum and the last the column maximum.
    pub edges: Vec<f64>,
    /// Values per bin; the maximum falls into the last bin.
    pub counts: Vec<usize>,
}

/// Partition the column's value range into `bin_count` equal-width bins.
///
/// All-identical values are widened to [v − 0.5, v + 0.5] so the partition
/// stays well defined. Fails with `InvalidBinCount` for zero bins,
/// `ColumnNotFound` for an unknown column, and `EmptyDataset` when the
/// column holds no values.
pub fn histogram_buckets(
    dataset: &SeriesDataset,
    column: &str,
    bin_count: usize,
) -> Result<HistogramBuckets, StatsError> {
    if bin_count == 0 {
        return Err(StatsError::InvalidBinCount);
    }
    let values = dataset
        .column_values(column)
        .ok_or_else(|| StatsError::ColumnNotFound(column.to_string()))?;
    if values.is_empty() {
        return Err(StatsError::EmptyDataset);
    }

    let mut min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        min -= 0.5;
        max += 0.5;
    }
    let width = (max - min) / bin_count as f64;

    let mut edges: Vec<f64> = (0..=bin_count).map(|i| min + i as f64 * width).collect();
    edges[bin_count] = max; // pin the last edge against rounding drift

    let mut counts = vec![0_usize; bin_count];
    for &v in &values {
        let bin = ((v - min) / width).floor() as usize;
        counts[bin.min(bin_count - 1)] += 1;
    }

    Ok(HistogramBuckets {
        column: column.to_string(),
        edges,
        counts,
    })
}

// ---------------------------------------------------------------------------
// Box-plot summary
// ---------------------------------------------------------------------------

/// Five-number summary with 1.5·IQR whiskers, the data behind a box plot.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxPlotSummary {
    pub column: String,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    /// Smallest value at or above q1 − 1.5·IQR.
    pub lower_whisker: f64,
    /// Largest value at or below q3 + 1.5·IQR.
    pub upper_whisker: f64,
    /// Values beyond either whisker, ascending.
    pub outliers: Vec<f64>,
}

/// Box-plot data for one column.
pub fn box_plot_summary(
    dataset: &SeriesDataset,
    column: &str,
) -> Result<BoxPlotSummary, StatsError> {
    let mut values = dataset
        .column_values(column)
        .ok_or_else(|| StatsError::ColumnNotFound(column.to_string()))?;
    if values.is_empty() {
        return Err(StatsError::EmptyDataset);
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let q1 = quantile(&values, 0.25);
    let median = quantile(&values, 0.5);
    let q3 = quantile(&values, 0.75);
    let iqr = q3 - q1;
    let lower_fence = q1 - 1.5 * iqr;
    let upper_fence = q3 + 1.5 * iqr;

    let lower_whisker = values
        .iter()
        .copied()
        .find(|&v| v >= lower_fence)
        .unwrap_or(q1);
    let upper_whisker = values
        .iter()
        .copied()
        .rev()
        .find(|&v| v <= upper_fence)
        .unwrap_or(q3);
    let outliers: Vec<f64> = values
        .iter()
        .copied()
        .filter(|&v| v < lower_fence || v > upper_fence)
        .collect();

    Ok(BoxPlotSummary {
        column: column.to_string(),
        min: values[0],
        q1,
        median,
        q3,
        max: values[values.len() - 1],
        lower_whisker,
        upper_whisker,
        outliers,
    })
}

// ---------------------------------------------------------------------------
// Scatter pairs
// ---------------------------------------------------------------------------

/// Two parallel value sequences for one scatter plot.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPair {
    pub x_column: String,
    pub y_column: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Extract the parallel sequences for each requested column pair, keeping
/// only rows where both cells are present.
pub fn scatter_pairs(
    dataset: &SeriesDataset,
    pairs: &[(&str, &str)],
) -> Result<Vec<ScatterPair>, StatsError> {
    pairs
        .iter()
        .map(|&(xc, yc)| {
            let x_cells = dataset
                .column_cells(xc)
                .ok_or_else(|| StatsError::ColumnNotFound(xc.to_string()))?;
            let y_cells = dataset
                .column_cells(yc)
                .ok_or_else(|| StatsError::ColumnNotFound(yc.to_string()))?;

            let mut x = Vec::new();
            let mut y = Vec::new();
            for (a, b) in x_cells.into_iter().zip(y_cells) {
                if let (Some(a), Some(b)) = (a, b) {
                    x.push(a);
                    y.push(b);
                }
            }
            Ok(ScatterPair {
                x_column: xc.to_string(),
                y_column: yc.to_string(),
                x,
                y,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::WaterSample;
    use chrono::NaiveDate;

    fn dataset_from(values: &[f64]) -> SeriesDataset {
        let samples = values
            .iter()
            .enumerate()
            .map(|(i, &v)| WaterSample {
                date: NaiveDate::from_ymd_opt(2013, 1, 1).expect("valid")
                    + chrono::Days::new(i as u64),
                temperature: Some(v),
                ph: Some(v),
                cod: Some(v),
            })
            .collect();
        SeriesDataset::new(samples)
    }

    #[test]
    fn four_bins_over_zero_to_three() {
        let hist = histogram_buckets(&dataset_from(&[0.0, 1.0, 2.0, 3.0]), "cod", 4)
            .expect("should compute");
        assert_eq!(hist.counts, vec![1, 1, 1, 1]);
        let expected = [0.0, 0.75, 1.5, 2.25, 3.0];
        assert_eq!(hist.edges.len(), expected.len());
        for (edge, want) in hist.edges.iter().zip(expected) {
            assert!((edge - want).abs() < 1e-12, "edge {edge}, want {want}");
        }
    }

    #[test]
    fn maximum_lands_in_last_bin() {
        let hist = histogram_buckets(&dataset_from(&[0.0, 0.25, 1.0]), "Temperature", 2)
            .expect("should compute");
        assert_eq!(hist.counts, vec![2, 1]);
    }

    #[test]
    fn identical_values_widen_the_range() {
        let hist =
            histogram_buckets(&dataset_from(&[2.0, 2.0, 2.0]), "pH", 3).expect("should compute");
        assert_eq!(hist.counts.iter().sum::<usize>(), 3);
        assert!((hist.edges[0] - 1.5).abs() < 1e-12);
        assert!((hist.edges[3] - 2.5).abs() < 1e-12);
    }

    #[test]
    fn zero_bins_is_an_error() {
        let err = histogram_buckets(&dataset_from(&[1.0]), "cod", 0).expect_err("must fail");
        assert_eq!(err, StatsError::InvalidBinCount);
    }

    #[test]
    fn histogram_validation_errors() {
        assert_eq!(
            histogram_buckets(&SeriesDataset::default(), "cod", 4).expect_err("must fail"),
            StatsError::EmptyDataset
        );
        assert_eq!(
            histogram_buckets(&dataset_from(&[1.0]), "Nitrate", 4).expect_err("must fail"),
            StatsError::ColumnNotFound("Nitrate".to_string())
        );
    }

    #[test]
    fn box_plot_flags_an_outlier() {
        // q1 = 2, q3 = 4, fences at -1 and 7: 40 is the lone outlier.
        let summary = box_plot_summary(&dataset_from(&[1.0, 2.0, 3.0, 4.0, 40.0]), "Temperature")
            .expect("should compute");
        assert_eq!(summary.median, 3.0);
        assert_eq!(summary.lower_whisker, 1.0);
        assert_eq!(summary.upper_whisker, 4.0);
        assert_eq!(summary.outliers, vec![40.0]);
        assert_eq!(summary.max, 40.0);
    }

    #[test]
    fn box_plot_without_outliers_uses_extremes_as_whiskers() {
        let summary =
            box_plot_summary(&dataset_from(&[1.0, 2.0, 3.0, 4.0, 5.0]), "pH").expect("compute");
        assert_eq!(summary.lower_whisker, 1.0);
        assert_eq!(summary.upper_whisker, 5.0);
        assert!(summary.outliers.is_empty());
    }

    #[test]
    fn scatter_pairs_drop_incomplete_rows() {
        let mut ds = dataset_from(&[1.0, 2.0, 3.0]);
        ds.samples[1].ph = None;
        let pairs =
            scatter_pairs(&ds, &[("Temperature", "pH"), ("pH", "cod")]).expect("should compute");
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].x, vec![1.0, 3.0]);
        assert_eq!(pairs[0].y, vec![1.0, 3.0]);
        assert_eq!(pairs[1].x_column, "pH");
        assert_eq!(pairs[1].x.len(), 2);
    }

    #[test]
    fn scatter_pair_with_unknown_column_is_an_error() {
        let ds = dataset_from(&[1.0]);
        let err = scatter_pairs(&ds, &[("Temperature", "Flow")]).expect_err("must fail");
        assert_eq!(err, StatsError::ColumnNotFound("Flow".to_string()));
    }
}
