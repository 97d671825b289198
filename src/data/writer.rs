use std::path::Path;

use anyhow::{Context, Result};

use super::model::{SeriesDataset, ALL_COLUMNS};

// ---------------------------------------------------------------------------
// CSV writer
// ---------------------------------------------------------------------------

/// Persist the dataset as the flat tabular artifact.
///
/// The `Date,Temperature,pH,cod` header is written explicitly so an empty
/// dataset still produces a well-formed artifact; dates serialize as
/// ISO-8601 and floats as their shortest round-tripping decimal form, so a
/// reload reproduces the values exactly.
pub fn write_csv(dataset: &SeriesDataset, path: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("creating artifact at {}", path.display()))?;

    writer
        .write_record(ALL_COLUMNS)
        .with_context(|| format!("writing header to {}", path.display()))?;

    for sample in &dataset.samples {
        writer
            .serialize(sample)
            .with_context(|| format!("writing row dated {}", sample.date))?;
    }

    writer
        .flush()
        .with_context(|| format!("flushing artifact at {}", path.display()))?;
    Ok(())
}
