//! Record store wiring.
//!
//! The dataset is a flat CSV of `Platform, Category, Service, Solution,
//! Description` rows (for example `data/clouds.csv`). It is loaded fresh for
//! every invocation; `ColumnIndex` provides the membership checks used to
//! validate query parameters.

pub mod index;
pub mod model;

pub use index::ColumnIndex;
pub use model::{Record, load_records, load_records_from_reader};

/// Default dataset path, relative to the data root.
pub const DEFAULT_DATASET_PATH: &str = "data/clouds.csv";
