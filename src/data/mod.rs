/// Data layer: core types, generation, and persistence.
///
/// Architecture:
/// ```text
///   start/end dates
///        │
///        ▼
///   ┌──────────┐
///   │ generate  │  month-end schedule + uniform draws → SeriesDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer   │  SeriesDataset → Date,Temperature,pH,cod CSV
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse artifact → SeriesDataset (dates as dates)
///   └──────────┘
/// ```

pub mod generate;
pub mod loader;
pub mod model;
pub mod writer;
