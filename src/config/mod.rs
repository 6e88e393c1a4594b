//! Configuration module for the reaction-scope application.

pub mod analysis;
pub mod plot;

// Re-export commonly used items
pub use analysis::{
    DEFAULT_SMOOTHING_WINDOW, ENVIRONMENT_COLUMNS, KDE_GRID_POINTS, KDE_PAD_FRACTION,
    SMOOTHING_WINDOW_MAX, SMOOTHING_WINDOW_MIN, TEMPERATURE_COLUMN, TIME_COLUMN, VOLUME_COLUMN,
};
