//! Correlation analysis.
//!
//! Pearson product-moment correlation over pairwise-complete observations
//! and the symmetric correlation matrix that feeds the heatmap.

use super::StatsError;
use crate::data::model::SeriesDataset;

// ---------------------------------------------------------------------------
// CorrelationMatrix
// ---------------------------------------------------------------------------

/// Symmetric matrix of pairwise Pearson coefficients.
///
/// The diagonal is exactly 1.0 for every column with nonzero variance;
/// entries involving a degenerate column (zero variance or fewer than two
/// paired observations) are NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    data: Vec<f64>,
}

impl CorrelationMatrix {
    /// Number of rows (equal to the number of columns).
    pub fn size(&self) -> usize {
        self.columns.len()
    }

    /// Coefficient between columns `i` and `j`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.columns.len() + j]
    }
}

/// Compute the pairwise Pearson correlation matrix for the named columns.
///
/// Each pair is computed over the rows where both cells are present.
/// Fails with `EmptyDataset` on a dataset with no rows and `ColumnNotFound`
/// for an unknown column name.
pub fn correlation_matrix(
    dataset: &SeriesDataset,
    columns: &[&str],
) -> Result<CorrelationMatrix, StatsError> {
    if dataset.is_empty() {
        return Err(StatsError::EmptyDataset);
    }

    let cells: Vec<Vec<Option<f64>>> = columns
        .iter()
        .map(|&col| {
            dataset
                .column_cells(col)
                .ok_or_else(|| StatsError::ColumnNotFound(col.to_string()))
        })
        .collect::<Result<_, _>>()?;

    let p = columns.len();
    let mut data = vec![f64::NAN; p * p];

    for i in 0..p {
        data[i * p + i] = pairwise_pearson(&cells[i], &cells[i]);
        for j in (i + 1)..p {
            let r = pairwise_pearson(&cells[i], &cells[j]);
            data[i * p + j] = r;
            data[j * p + i] = r;
        }
    }

    Ok(CorrelationMatrix {
        columns: columns.iter().map(|c| c.to_string()).collect(),
        data,
    })
}

/// Pearson r over the rows where both cells are present.
///
/// NaN when fewer than two complete pairs remain or either side has zero
/// variance; the result is clamped to [-1, 1] against rounding drift.
pub fn pairwise_pearson(x: &[Option<f64>], y: &[Option<f64>]) -> f64 {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y.iter())
        .filter_map(|(a, b)| Some(((*a)?, (*b)?)))
        .collect();

    let n = pairs.len();
    if n < 2 {
        return f64::NAN;
    }

    let nf = n as f64;
    let mean_x = pairs.iter().map(|(a, _)| a).sum::<f64>() / nf;
    let mean_y = pairs.iter().map(|(_, b)| b).sum::<f64>() / nf;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in &pairs {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x <= 0.0 || var_y <= 0.0 {
        return f64::NAN;
    }

    (cov / (var_x * var_y).sqrt()).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generate::generate;
    use crate::data::model::WaterSample;
    use chrono::NaiveDate;

    fn dataset(rows: &[(f64, f64, f64)]) -> SeriesDataset {
        let samples = rows
            .iter()
            .enumerate()
            .map(|(i, &(t, ph, cod))| WaterSample {
                date: NaiveDate::from_ymd_opt(2013, 1, 1).expect("valid")
                    + chrono::Days::new(i as u64),
                temperature: Some(t),
                ph: Some(ph),
                cod: Some(cod),
            })
            .collect();
        SeriesDataset::new(samples)
    }

    #[test]
    fn perfect_linear_relationships() {
        // pH = 2·temperature, cod = −temperature
        let ds = dataset(&[
            (1.0, 2.0, -1.0),
            (2.0, 4.0, -2.0),
            (3.0, 6.0, -3.0),
            (4.0, 8.0, -4.0),
        ]);
        let m = correlation_matrix(&ds, &["Temperature", "pH", "cod"]).expect("should compute");
        assert!((m.get(0, 1) - 1.0).abs() < 1e-12);
        assert!((m.get(0, 2) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn matrix_is_symmetric_with_unit_diagonal() {
        let ds = generate(
            NaiveDate::from_ymd_opt(2013, 1, 1).expect("valid"),
            NaiveDate::from_ymd_opt(2018, 12, 31).expect("valid"),
            Some(3),
        );
        let m = correlation_matrix(&ds, &["Temperature", "pH", "cod"]).expect("should compute");
        for i in 0..m.size() {
            assert_eq!(m.get(i, i), 1.0);
            for j in 0..m.size() {
                assert!((m.get(i, j) - m.get(j, i)).abs() < 1e-15);
                assert!((-1.0..=1.0).contains(&m.get(i, j)));
            }
        }
    }

    #[test]
    fn degenerate_column_yields_nan_entries() {
        let ds = dataset(&[(5.0, 1.0, 0.0), (5.0, 2.0, 1.0), (5.0, 3.0, 2.0)]);
        let m = correlation_matrix(&ds, &["Temperature", "pH"]).expect("should compute");
        assert!(m.get(0, 0).is_nan());
        assert!(m.get(0, 1).is_nan());
        assert_eq!(m.get(1, 1), 1.0);
    }

    #[test]
    fn empty_dataset_is_an_error() {
        let err =
            correlation_matrix(&SeriesDataset::default(), &["Temperature"]).expect_err("must fail");
        assert_eq!(err, StatsError::EmptyDataset);
    }

    #[test]
    fn unknown_column_is_an_error() {
        let ds = dataset(&[(1.0, 2.0, 3.0)]);
        let err = correlation_matrix(&ds, &["Temperature", "Flow"]).expect_err("must fail");
        assert_eq!(err, StatsError::ColumnNotFound("Flow".to_string()));
    }

    #[test]
    fn pairwise_skips_incomplete_rows() {
        let mut ds = dataset(&[(1.0, 2.0, 0.0), (2.0, 9.0, 0.0), (3.0, 6.0, 0.0)]);
        // Drop the pH cell of the middle row: the remaining pairs are perfectly linear.
        ds.samples[1].ph = None;
        let m = correlation_matrix(&ds, &["Temperature", "pH"]).expect("should compute");
        assert!((m.get(0, 1) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn single_complete_pair_is_nan() {
        let r = pairwise_pearson(&[Some(1.0), None], &[Some(2.0), Some(3.0)]);
        assert!(r.is_nan());
    }
}
