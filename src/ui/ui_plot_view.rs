use eframe::egui::Ui;
use egui_plot::{AxisHints, Corner, HPlacement, Legend, Line, Plot, PlotPoints};

use crate::analysis::{KdeHistory, moving_average};
use crate::config::plot::PLOT_CONFIG;
use crate::config::{TEMPERATURE_COLUMN, VOLUME_COLUMN};
use crate::data::TimeSeriesTable;
use crate::models::PlotMode;
use crate::ui::config::UI_TEXT;
use crate::ui::styles::UiStyleExt;
use crate::utils::maths_utils::get_min_max;

/// Affine bridge between the metrics axis and the environment axis.
///
/// egui_plot draws everything in one coordinate space, so the secondary
/// (right-hand) axis is realized by rescaling environment values into the
/// primary range and inverting that mapping in the right axis' tick
/// formatter.
#[derive(Debug, Clone, Copy)]
pub struct DualAxisMapper {
    p_min: f64,
    p_max: f64,
    s_min: f64,
    s_max: f64,
}

impl DualAxisMapper {
    pub fn new(primary: (f64, f64), secondary: (f64, f64)) -> Self {
        let (p_min, p_max) = widen_if_degenerate(primary);
        let (s_min, s_max) = widen_if_degenerate(secondary);
        Self {
            p_min,
            p_max,
            s_min,
            s_max,
        }
    }

    /// Maps an environment value onto the primary (metrics) axis.
    pub fn to_primary(&self, v: f64) -> f64 {
        self.p_min + (v - self.s_min) / (self.s_max - self.s_min) * (self.p_max - self.p_min)
    }

    /// Maps a primary-axis coordinate back to environment units, used for the
    /// right-hand tick labels.
    pub fn to_secondary(&self, y: f64) -> f64 {
        self.s_min + (y - self.p_min) / (self.p_max - self.p_min) * (self.s_max - self.s_min)
    }
}

/// A flat or empty range would make the affine mapping divide by zero.
fn widen_if_degenerate((min, max): (f64, f64)) -> (f64, f64) {
    if max > min {
        (min, max)
    } else {
        (min - 0.5, min + 0.5)
    }
}

/// Chart-ready `[time, value]` pairs for the metrics trace. Smoothing gaps
/// (the leading `window - 1` samples) are dropped, not drawn as zero.
pub fn metrics_points(
    time: &[f64],
    values: &[f64],
    mode: PlotMode,
    smoothing_window: usize,
) -> Vec<[f64; 2]> {
    if mode.applies_smoothing() {
        moving_average(values, smoothing_window)
            .into_iter()
            .zip(time.iter())
            .filter_map(|(v, &t)| v.map(|v| [t, v]))
            .collect()
    } else {
        time.iter()
            .zip(values.iter())
            .map(|(&t, &v)| [t, v])
            .collect()
    }
}

fn y_range_of(points: &[[f64; 2]]) -> Option<(f64, f64)> {
    if points.is_empty() {
        return None;
    }
    let ys: Vec<f64> = points.iter().map(|p| p[1]).collect();
    Some(get_min_max(&ys))
}

/// Stateless projection of current state into the two charts. No session
/// state is mutated here.
pub struct PlotView;

impl PlotView {
    /// Dual-axis time series: the selected metrics column against the
    /// always-shown environment signals.
    pub fn show_time_series(
        ui: &mut Ui,
        metrics: &TimeSeriesTable,
        environment: &TimeSeriesTable,
        column: &str,
        mode: PlotMode,
        smoothing_window: usize,
        height: f32,
    ) {
        let values = metrics.column(column).unwrap_or(&[]);
        let series = metrics_points(metrics.time(), values, mode, smoothing_window);

        let env_time = environment.time();
        let temperature = environment.column(TEMPERATURE_COLUMN).unwrap_or(&[]);
        let volume = environment.column(VOLUME_COLUMN).unwrap_or(&[]);

        let primary_range = y_range_of(&series).unwrap_or((0.0, 1.0));
        let mut env_values: Vec<f64> = temperature.to_vec();
        env_values.extend_from_slice(volume);
        let secondary_range = if env_values.is_empty() {
            (0.0, 1.0)
        } else {
            get_min_max(&env_values)
        };
        let mapper = DualAxisMapper::new(primary_range, secondary_range);

        let temperature_points: Vec<[f64; 2]> = env_time
            .iter()
            .zip(temperature.iter())
            .map(|(&t, &v)| [t, mapper.to_primary(v)])
            .collect();
        let volume_points: Vec<[f64; 2]> = env_time
            .iter()
            .zip(volume.iter())
            .map(|(&t, &v)| [t, mapper.to_primary(v)])
            .collect();

        let primary_axis = AxisHints::new_y()
            .label(column.to_string())
            .placement(HPlacement::Left);
        let secondary_axis = AxisHints::new_y()
            .label(UI_TEXT.environment_axis)
            .placement(HPlacement::Right)
            .formatter(move |grid_mark, _range| {
                format!("{:.2}", mapper.to_secondary(grid_mark.value))
            });
        let x_axis = AxisHints::new_x().label(UI_TEXT.time_axis);

        Plot::new("time_series_plot")
            .legend(Legend::default().position(Corner::RightTop))
            .custom_x_axes(vec![x_axis])
            .custom_y_axes(vec![primary_axis, secondary_axis])
            .height(height)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(TEMPERATURE_COLUMN, PlotPoints::new(temperature_points))
                        .color(PLOT_CONFIG.temperature_color)
                        .width(PLOT_CONFIG.environment_line_width),
                );
                plot_ui.line(
                    Line::new(VOLUME_COLUMN, PlotPoints::new(volume_points))
                        .color(PLOT_CONFIG.volume_color)
                        .width(PLOT_CONFIG.environment_line_width),
                );

                let color = match mode {
                    PlotMode::Raw => PLOT_CONFIG.raw_series_color,
                    PlotMode::Smoothed => PLOT_CONFIG.smoothed_series_color,
                    PlotMode::Filtered => PLOT_CONFIG.filtered_series_color,
                };
                let name = format!("{} {}", mode.trace_prefix(), column);
                plot_ui.line(
                    Line::new(name, PlotPoints::new(series))
                        .color(color)
                        .width(PLOT_CONFIG.series_line_width),
                );
            });
    }

    /// Density chart: every accumulated snapshot for the selected column,
    /// one labeled curve each, in creation order.
    pub fn show_density(ui: &mut Ui, history: &KdeHistory, column: &str, height: f32) {
        let records: Vec<_> = history.records_for(column).collect();
        if records.is_empty() {
            ui.add_space(10.0);
            ui.label_subdued(UI_TEXT.density_empty_hint);
            return;
        }

        let x_axis = AxisHints::new_x().label(column.to_string());
        let y_axis = AxisHints::new_y()
            .label(UI_TEXT.density_axis)
            .placement(HPlacement::Left);

        Plot::new("density_plot")
            .legend(Legend::default().position(Corner::RightTop))
            .custom_x_axes(vec![x_axis])
            .custom_y_axes(vec![y_axis])
            .height(height)
            .show(ui, |plot_ui| {
                for record in records {
                    plot_ui.line(
                        Line::new(record.legend_label(), PlotPoints::new(record.points()))
                            .width(PLOT_CONFIG.density_line_width),
                    );
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapper_round_trips_over_the_secondary_range() {
        let mapper = DualAxisMapper::new((10.0, 50.0), (1.0, 5.0));
        for v in [1.0, 2.5, 5.0] {
            let mapped = mapper.to_primary(v);
            assert!((mapper.to_secondary(mapped) - v).abs() < 1e-12);
        }
        // Endpoints land on the primary endpoints
        assert!((mapper.to_primary(1.0) - 10.0).abs() < 1e-12);
        assert!((mapper.to_primary(5.0) - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_mapper_handles_flat_ranges() {
        let mapper = DualAxisMapper::new((3.0, 3.0), (7.0, 7.0));
        let mapped = mapper.to_primary(7.0);
        assert!(mapped.is_finite());
        assert!((mapper.to_secondary(mapped) - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_metrics_points_raw_keeps_every_row() {
        let time = [0.0, 1.0, 2.0];
        let values = [10.0, 20.0, 30.0];
        let points = metrics_points(&time, &values, PlotMode::Raw, 5);
        assert_eq!(points, vec![[0.0, 10.0], [1.0, 20.0], [2.0, 30.0]]);
    }

    #[test]
    fn test_metrics_points_smoothing_drops_the_leading_gap() {
        let time = [0.0, 1.0, 2.0, 3.0];
        let values = [1.0, 2.0, 3.0, 4.0];
        let points = metrics_points(&time, &values, PlotMode::Smoothed, 3);
        // First window-1 samples are gaps, not zeros
        assert_eq!(points, vec![[2.0, 2.0], [3.0, 3.0]]);
    }

    #[test]
    fn test_filtered_mode_matches_smoothed_data() {
        // Parity with the observed source behavior: Filtered applies the
        // identical transform as Smoothed, only the labeling differs.
        let time = [0.0, 1.0, 2.0, 3.0];
        let values = [4.0, 8.0, 6.0, 2.0];
        let smoothed = metrics_points(&time, &values, PlotMode::Smoothed, 2);
        let filtered = metrics_points(&time, &values, PlotMode::Filtered, 2);
        assert_eq!(smoothed, filtered);
    }
}
