//! Fixed analysis constants. None of these are user-configurable at runtime.

/// Name of the time index column, shared by both input files.
pub const TIME_COLUMN: &str = "Time";

/// Hard-coded signal names expected in the iControl environment file.
pub const TEMPERATURE_COLUMN: &str = "Temperature";
pub const VOLUME_COLUMN: &str = "Volume";

/// Columns the environment file must carry, checked at load time.
pub const ENVIRONMENT_COLUMNS: [&str; 2] = [TEMPERATURE_COLUMN, VOLUME_COLUMN];

/// Number of evenly spaced sample points on every KDE grid.
pub const KDE_GRID_POINTS: usize = 100;

/// Fraction of the value range added on each side of the KDE grid so the
/// density tails are not clipped at the domain edges.
pub const KDE_PAD_FRACTION: f64 = 0.1;

/// Bounds and default for the trailing moving-average window control.
pub const SMOOTHING_WINDOW_MIN: usize = 1;
pub const SMOOTHING_WINDOW_MAX: usize = 100;
pub const DEFAULT_SMOOTHING_WINDOW: usize = 5;
