// Data preparation: CSV ingestion and time-window filtering.
pub mod acquire;
pub mod table;

pub use acquire::{AcquiredFile, DialogAcquirer, FileAcquirer, PathAcquirer};
pub use table::TimeSeriesTable;
