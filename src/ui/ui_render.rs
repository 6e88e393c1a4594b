use eframe::egui::{CentralPanel, Color32, Context, Frame, Margin, SidePanel, TopBottomPanel};

use crate::config::plot::PLOT_CONFIG;
use crate::config::{SMOOTHING_WINDOW_MAX, SMOOTHING_WINDOW_MIN};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{ControlEventChanged, ControlsPanel, FilesEvent, FilesPanel, Panel};
use crate::ui::ui_plot_view::PlotView;

use super::app::{ReactionScopeApp, TableSlot};

impl ReactionScopeApp {
    pub(super) fn render_side_panel(&mut self, ctx: &Context) {
        let side_panel_frame = Frame::new().fill(UI_CONFIG.colors.side_panel);
        SidePanel::left("left_panel")
            .min_width(200.0)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                let file_events = {
                    let mut panel = FilesPanel::new(
                        self.data_state
                            .metrics
                            .as_ref()
                            .map(|t| t.source_name.as_str()),
                        self.data_state
                            .environment
                            .as_ref()
                            .map(|t| t.source_name.as_str()),
                    );
                    panel.render(ui)
                };
                for event in file_events {
                    match event {
                        FilesEvent::LoadMetrics => self.load_table_interactive(TableSlot::Metrics),
                        FilesEvent::LoadEnvironment => {
                            self.load_table_interactive(TableSlot::Environment)
                        }
                    }
                }

                // Controls only make sense once the metrics file is in
                let Some(bounds) = self.observed_time_bounds() else {
                    return;
                };
                let control_events = {
                    let columns = self
                        .data_state
                        .metrics
                        .as_ref()
                        .map(|t| {
                            t.column_names()
                                .iter()
                                .map(|c| c.to_string())
                                .collect::<Vec<_>>()
                        })
                        .unwrap_or_default();

                    let mut panel = ControlsPanel::new(
                        columns,
                        self.selected_column.clone(),
                        self.time_window.unwrap_or(bounds),
                        bounds,
                        self.smoothing_window,
                        self.plot_mode,
                    );
                    panel.render(ui)
                };

                for event in control_events {
                    match event {
                        ControlEventChanged::Column(column) => {
                            log::info!("Selected column '{column}'");
                            self.selected_column = Some(column);
                        }
                        ControlEventChanged::TimeWindow(lo, hi) => {
                            self.time_window = Some((lo, hi));
                            self.clamp_time_window();
                        }
                        ControlEventChanged::SmoothingWindow(window) => {
                            self.smoothing_window =
                                window.clamp(SMOOTHING_WINDOW_MIN, SMOOTHING_WINDOW_MAX);
                        }
                        ControlEventChanged::PlotMode(mode) => {
                            self.plot_mode = mode;
                        }
                        ControlEventChanged::UpdateKde => {
                            // The one explicitly user-initiated computation
                            self.update_kde();
                        }
                    }
                }
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new().fill(UI_CONFIG.colors.central_panel);
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ui.add_space(10.0);

                let (Some(metrics), Some(environment)) =
                    (&self.data_state.metrics, &self.data_state.environment)
                else {
                    ui.vertical_centered(|ui| {
                        ui.add_space(60.0);
                        ui.heading(UI_TEXT.waiting_for_files);
                    });
                    return;
                };
                let (Some(column), Some(window)) =
                    (self.selected_column.as_deref(), self.current_window())
                else {
                    return;
                };

                // Filtering and smoothing recompute live on every interaction;
                // only the KDE waits for its explicit trigger.
                let filtered_metrics = metrics.filter_by_window(window);
                let filtered_environment = environment.filter_by_window(window);

                let available = ui.available_height();
                let time_series_height = available * PLOT_CONFIG.time_series_height_fraction;
                let density_height = (available - time_series_height - 30.0).max(120.0);

                PlotView::show_time_series(
                    ui,
                    &filtered_metrics,
                    &filtered_environment,
                    column,
                    self.plot_mode,
                    self.smoothing_window,
                    time_series_height,
                );
                ui.add_space(10.0);
                PlotView::show_density(ui, &self.data_state.kde_history, column, density_height);
            });
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let status_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(8, 4));
        TopBottomPanel::bottom("status_panel")
            .frame(status_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let value_color = Color32::from_rgb(150, 200, 255);

                    match &self.data_state.metrics {
                        Some(table) => ui.metric(
                            UI_TEXT.metrics_label,
                            &format!("{} rows", table.row_count()),
                            value_color,
                        ),
                        None => ui.label_warning(format!("{}: —", UI_TEXT.metrics_label)),
                    }
                    ui.separator();

                    match &self.data_state.environment {
                        Some(table) => ui.metric(
                            UI_TEXT.environment_label,
                            &format!("{} rows", table.row_count()),
                            value_color,
                        ),
                        None => ui.label_warning(format!("{}: —", UI_TEXT.environment_label)),
                    }
                    ui.separator();

                    if let Some(window) = self.current_window() {
                        ui.metric("window", &window.to_string(), value_color);
                        ui.separator();
                    }

                    ui.metric(
                        "KDE snapshots",
                        &self.data_state.kde_history.len().to_string(),
                        value_color,
                    );

                    if let Some(error) = &self.data_state.last_error {
                        ui.separator();
                        ui.label_error(format!("⚠ {error}"));
                    }
                });
            });
    }
}
