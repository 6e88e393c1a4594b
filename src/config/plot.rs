//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    pub raw_series_color: Color32,
    pub smoothed_series_color: Color32,
    pub filtered_series_color: Color32,
    pub temperature_color: Color32,
    pub volume_color: Color32,
    /// Width of the metrics series line
    pub series_line_width: f32,
    /// Width of the environment (Temperature/Volume) lines
    pub environment_line_width: f32,
    /// Width of each accumulated density curve
    pub density_line_width: f32,
    /// Height of the time-series chart as a fraction of the available panel
    pub time_series_height_fraction: f32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    raw_series_color: Color32::from_rgba_premultiplied(128, 128, 128, 128), // Half-opaque gray
    smoothed_series_color: Color32::from_rgb(70, 130, 255),                 // Blue
    filtered_series_color: Color32::from_rgb(150, 110, 255),                // Violet
    temperature_color: Color32::from_rgb(255, 165, 0),                      // Orange
    volume_color: Color32::from_rgb(0, 200, 0),                             // Green
    series_line_width: 1.8,
    environment_line_width: 1.2,
    density_line_width: 1.5,
    time_series_height_fraction: 0.55,
};
