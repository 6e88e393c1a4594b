use crate::models::TimeWindow;

/// The output of one density-estimate computation.
///
/// Immutable once created: the x grid and density values are paired sequences
/// of equal length, and the originating window and column are kept so every
/// accumulated snapshot stays traceable on the chart legend.
#[derive(Debug, Clone, PartialEq)]
pub struct KdeRecord {
    pub x: Vec<f64>,
    pub density: Vec<f64>,
    pub window: TimeWindow,
    pub column: String,
}

impl KdeRecord {
    /// Legend label for this snapshot, e.g. `"X at Time [1, 3]"`.
    pub fn legend_label(&self) -> String {
        format!("{} at Time {}", self.column, self.window)
    }

    /// Chart-ready `[x, y]` point pairs.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.x
            .iter()
            .zip(self.density.iter())
            .map(|(&x, &y)| [x, y])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legend_label_names_column_and_window() {
        let record = KdeRecord {
            x: vec![0.0, 1.0],
            density: vec![0.5, 0.5],
            window: TimeWindow::new(1.0, 3.0),
            column: "X".to_string(),
        };
        assert_eq!(record.legend_label(), "X at Time [1, 3]");
    }

    #[test]
    fn test_points_pairs_grid_and_density() {
        let record = KdeRecord {
            x: vec![0.0, 1.0, 2.0],
            density: vec![0.1, 0.2, 0.3],
            window: TimeWindow::new(0.0, 2.0),
            column: "X".to_string(),
        };
        assert_eq!(record.points(), vec![[0.0, 0.1], [1.0, 0.2], [2.0, 0.3]]);
    }
}
