// Domain value types shared between the data layer, the analysis pipeline
// and the UI.
pub mod density;
pub mod window;

pub use density::KdeRecord;
pub use window::TimeWindow;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// How the selected metrics column is rendered on the time-series chart.
///
/// `Filtered` applies the exact same moving average as `Smoothed`; the source
/// behavior this tool reproduces drew them as two differently labeled traces
/// with identical data, so the variants stay separate rather than being folded.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, Default,
)]
pub enum PlotMode {
    #[default]
    Raw,
    Smoothed,
    Filtered,
}

impl PlotMode {
    /// Legend label prefix for the metrics trace.
    pub fn trace_prefix(&self) -> &'static str {
        match self {
            PlotMode::Raw => "Raw",
            PlotMode::Smoothed => "Smoothed",
            PlotMode::Filtered => "Filtered",
        }
    }

    /// Whether this mode runs the series through the moving average.
    pub fn applies_smoothing(&self) -> bool {
        !matches!(self, PlotMode::Raw)
    }
}
