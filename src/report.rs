use std::fmt::Write as _;

use crate::data::model::WaterSample;
use crate::stats::correlation::CorrelationMatrix;
use crate::stats::describe::ColumnSummary;
use crate::stats::distribution::{BoxPlotSummary, HistogramBuckets};

// ---------------------------------------------------------------------------
// Terminal rendering of the summaries
// ---------------------------------------------------------------------------

/// Render a slice of rows as a small table (used for head and tail).
pub fn rows_table(rows: &[WaterSample]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<12} {:>12} {:>12} {:>12}",
        "Date", "Temperature", "pH", "cod"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:<12} {:>12} {:>12} {:>12}",
            row.date,
            cell(row.temperature),
            cell(row.ph),
            cell(row.cod),
        );
    }
    out
}

/// Render descriptive statistics with statistics as rows and columns across,
/// the familiar describe() layout.
pub fn describe_table(summaries: &[ColumnSummary]) -> String {
    let mut out = String::new();
    let _ = write!(out, "{:<8}", "");
    for s in summaries {
        let _ = write!(out, " {:>12}", s.column);
    }
    let _ = writeln!(out);

    let rows: [(&str, fn(&ColumnSummary) -> f64); 8] = [
        ("count", |s| s.count as f64),
        ("mean", |s| s.mean),
        ("std", |s| s.std_dev),
        ("min", |s| s.min),
        ("25%", |s| s.q1),
        ("50%", |s| s.median),
        ("75%", |s| s.q3),
        ("max", |s| s.max),
    ];
    for (label, pick) in rows {
        let _ = write!(out, "{label:<8}");
        for s in summaries {
            if label == "count" {
                let _ = write!(out, " {:>12}", s.count);
            } else {
                let _ = write!(out, " {:>12.4}", pick(s));
            }
        }
        let _ = writeln!(out);
    }
    out
}

/// Render per-column missing-value counts.
pub fn null_counts_table(counts: &[(String, usize)]) -> String {
    let mut out = String::new();
    for (column, nulls) in counts {
        let _ = writeln!(out, "{column:<12} {nulls}");
    }
    out
}

/// Render the correlation matrix with row and column labels.
pub fn correlation_table(matrix: &CorrelationMatrix) -> String {
    let mut out = String::new();
    let _ = write!(out, "{:<12}", "");
    for column in &matrix.columns {
        let _ = write!(out, " {column:>12}");
    }
    let _ = writeln!(out);
    for (i, column) in matrix.columns.iter().enumerate() {
        let _ = write!(out, "{column:<12}");
        for j in 0..matrix.size() {
            let _ = write!(out, " {:>12.4}", matrix.get(i, j));
        }
        let _ = writeln!(out);
    }
    out
}

/// Render histogram buckets as one `[lo, hi)` range per line with its count.
pub fn histogram_table(hist: &HistogramBuckets) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Distribution of {}:", hist.column);
    let last = hist.counts.len() - 1;
    for (i, count) in hist.counts.iter().enumerate() {
        let close = if i == last { ']' } else { ')' };
        let _ = writeln!(
            out,
            "  [{:>10.4}, {:>10.4}{close} {count}",
            hist.edges[i],
            hist.edges[i + 1],
        );
    }
    out
}

/// Render a box-plot summary as a one-column block.
pub fn box_plot_block(summary: &BoxPlotSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Box plot of {}:", summary.column);
    let _ = writeln!(out, "  whiskers [{:.4}, {:.4}]", summary.lower_whisker, summary.upper_whisker);
    let _ = writeln!(
        out,
        "  box [{:.4}, {:.4}], median {:.4}",
        summary.q1, summary.q3, summary.median
    );
    let _ = writeln!(out, "  outliers: {}", summary.outliers.len());
    out
}

fn cell(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.4}"),
        None => "<null>".to_string(),
    }
}
