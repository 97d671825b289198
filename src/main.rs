mod data;
mod report;
mod stats;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::{info, warn};

use data::generate::generate;
use data::loader::{load_csv, ArtifactError};
use data::model::NUMERIC_COLUMNS;
use data::writer::write_csv;
use stats::correlation::correlation_matrix;
use stats::describe::{describe_all, null_counts};
use stats::distribution::{box_plot_summary, histogram_buckets, scatter_pairs};

/// Default artifact location; the first CLI argument overrides it.
const DEFAULT_ARTIFACT: &str = "time_series_dataset.csv";

fn main() -> Result<()> {
    env_logger::init();

    let path: PathBuf = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_ARTIFACT.to_string())
        .into();

    let start = NaiveDate::from_ymd_opt(2013, 1, 1).expect("valid literal date");
    let end = NaiveDate::from_ymd_opt(2020, 12, 31).expect("valid literal date");

    let dataset = generate(start, end, None);
    info!("generated {} monthly samples", dataset.len());

    write_csv(&dataset, &path)
        .with_context(|| format!("persisting the dataset to {}", path.display()))?;
    info!("data saved to {}", path.display());

    // The reload proves the artifact parses back into dates and numbers; a
    // missing file is survivable because the in-memory dataset still exists.
    let loaded = match load_csv(&path) {
        Ok(ds) => {
            info!("reloaded {} rows from {}", ds.len(), path.display());
            ds
        }
        Err(err @ ArtifactError::NotFound { .. }) => {
            warn!("{err}; continuing with the in-memory dataset");
            dataset.clone()
        }
        Err(err) => return Err(err).context("reloading the artifact"),
    };

    let (rows, cols) = loaded.shape();
    println!("shape: ({rows}, {cols})");
    println!();
    println!("First 5 rows:");
    println!("{}", report::rows_table(loaded.head(5)));
    println!("Last 5 rows:");
    println!("{}", report::rows_table(loaded.tail(5)));
    println!("Descriptive statistics:");
    println!("{}", report::describe_table(&describe_all(&loaded)?));
    println!("Missing values per column:");
    println!("{}", report::null_counts_table(&null_counts(&loaded)));

    // Univariate view: distribution and spread per measurement column.
    for column in NUMERIC_COLUMNS {
        println!("{}", report::histogram_table(&histogram_buckets(&loaded, column, 20)?));
        println!("{}", report::box_plot_block(&box_plot_summary(&loaded, column)?));
    }

    // Bivariate view: scatter data goes to the plotting collaborator, the
    // correlation matrix to the terminal.
    let pairs = scatter_pairs(
        &loaded,
        &[("Temperature", "pH"), ("Temperature", "cod"), ("pH", "cod")],
    )?;
    for pair in &pairs {
        info!(
            "{} scatter points for {} vs {}",
            pair.x.len(),
            pair.x_column,
            pair.y_column
        );
    }
    println!("Correlation matrix:");
    println!(
        "{}",
        report::correlation_table(&correlation_matrix(&loaded, &NUMERIC_COLUMNS)?)
    );

    // Line-plot handoff: dates paired with the present values per column.
    for column in NUMERIC_COLUMNS {
        if let Some((dates, values)) = loaded.series(column) {
            info!("{} time-series points for {column} ({} dates)", values.len(), dates.len());
        }
    }

    Ok(())
}
