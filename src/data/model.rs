use chrono::NaiveDate;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Column names
// ---------------------------------------------------------------------------

/// Header name of the date column.
/// The persisted layout `Date,Temperature,pH,cod` is fixed for compatibility.
pub const DATE_COLUMN: &str = "Date";

/// The three numeric measurement columns, in column order.
pub const NUMERIC_COLUMNS: [&str; 3] = ["Temperature", "pH", "cod"];

/// All columns of the dataset, date first.
pub const ALL_COLUMNS: [&str; 4] = ["Date", "Temperature", "pH", "cod"];

// ---------------------------------------------------------------------------
// WaterSample – one row of the dataset
// ---------------------------------------------------------------------------

/// A single monthly measurement record.
///
/// Numeric cells are `Option` so that missing values in a reloaded artifact
/// are represented rather than silently defaulted; the generator always
/// produces fully populated rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterSample {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Temperature")]
    pub temperature: Option<f64>,
    #[serde(rename = "pH")]
    pub ph: Option<f64>,
    #[serde(rename = "cod")]
    pub cod: Option<f64>,
}

impl WaterSample {
    /// Value of a numeric column, `None` for unknown column names.
    pub fn value(&self, column: &str) -> Option<Option<f64>> {
        match column {
            "Temperature" => Some(self.temperature),
            "pH" => Some(self.ph),
            "cod" => Some(self.cod),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// SeriesDataset – the full ordered series
// ---------------------------------------------------------------------------

/// An ordered sequence of monthly samples, dates strictly increasing.
///
/// Built once by the generator or the loader and never mutated; all analysis
/// derives summaries from it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeriesDataset {
    pub samples: Vec<WaterSample>,
}

impl SeriesDataset {
    pub fn new(samples: Vec<WaterSample>) -> Self {
        SeriesDataset { samples }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// (row_count, column_count); the column count is the fixed four.
    pub fn shape(&self) -> (usize, usize) {
        (self.samples.len(), ALL_COLUMNS.len())
    }

    /// First `n` rows in dataset order, clamped to the available rows.
    pub fn head(&self, n: usize) -> &[WaterSample] {
        &self.samples[..n.min(self.samples.len())]
    }

    /// Last `n` rows in dataset order, clamped to the available rows.
    pub fn tail(&self, n: usize) -> &[WaterSample] {
        &self.samples[self.samples.len() - n.min(self.samples.len())..]
    }

    /// Whether `column` names one of the three numeric columns.
    pub fn has_numeric_column(column: &str) -> bool {
        NUMERIC_COLUMNS.contains(&column)
    }

    /// All cells of a numeric column in row order, `None` where missing.
    /// Returns `None` for an unknown column name.
    pub fn column_cells(&self, column: &str) -> Option<Vec<Option<f64>>> {
        if !Self::has_numeric_column(column) {
            return None;
        }
        Some(
            self.samples
                .iter()
                .map(|s| s.value(column).expect("known numeric column"))
                .collect(),
        )
    }

    /// Non-null values of a numeric column in row order.
    /// Returns `None` for an unknown column name.
    pub fn column_values(&self, column: &str) -> Option<Vec<f64>> {
        Some(self.column_cells(column)?.into_iter().flatten().collect())
    }

    /// (dates, values) for rows where `column` is present; feeds time-series
    /// line plots. Returns `None` for an unknown column name.
    pub fn series(&self, column: &str) -> Option<(Vec<NaiveDate>, Vec<f64>)> {
        if !Self::has_numeric_column(column) {
            return None;
        }
        let mut dates = Vec::new();
        let mut values = Vec::new();
        for s in &self.samples {
            if let Some(v) = s.value(column).expect("known numeric column") {
                dates.push(s.date);
                values.push(v);
            }
        }
        Some((dates, values))
    }
}
