use eframe::egui::{Button, ComboBox, Slider, Ui};
use strum::IntoEnumIterator;

use crate::config::{SMOOTHING_WINDOW_MAX, SMOOTHING_WINDOW_MIN};
use crate::models::PlotMode;
use crate::ui::config::UI_TEXT;
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{colored_subsection_heading, section_heading, spaced_separator};

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Panel with the two file-load buttons and the currently loaded names.
pub struct FilesPanel<'a> {
    metrics_name: Option<&'a str>,
    environment_name: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilesEvent {
    LoadMetrics,
    LoadEnvironment,
}

impl<'a> FilesPanel<'a> {
    pub fn new(metrics_name: Option<&'a str>, environment_name: Option<&'a str>) -> Self {
        Self {
            metrics_name,
            environment_name,
        }
    }

    fn render_slot(
        ui: &mut Ui,
        button_text: &str,
        label: &str,
        loaded_name: Option<&str>,
    ) -> bool {
        let clicked = ui.button(button_text).clicked();
        match loaded_name {
            Some(name) => ui.label_subdued(format!("{label}: {name}")),
            None => ui.label_warning(format!("{label}: not loaded")),
        }
        ui.add_space(5.0);
        clicked
    }
}

impl<'a> Panel for FilesPanel<'a> {
    type Event = FilesEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.files_heading);

        if Self::render_slot(
            ui,
            UI_TEXT.metrics_button,
            UI_TEXT.metrics_label,
            self.metrics_name,
        ) {
            events.push(FilesEvent::LoadMetrics);
        }
        if Self::render_slot(
            ui,
            UI_TEXT.environment_button,
            UI_TEXT.environment_label,
            self.environment_name,
        ) {
            events.push(FilesEvent::LoadEnvironment);
        }

        events
    }
}

/// Panel with the analysis controls: column, time range, smoothing window,
/// plot mode, and the explicit KDE trigger.
pub struct ControlsPanel {
    columns: Vec<String>,
    selected_column: Option<String>,
    window: (i64, i64),
    bounds: (i64, i64),
    smoothing_window: usize,
    plot_mode: PlotMode,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ControlEventChanged {
    Column(String),
    TimeWindow(i64, i64),
    SmoothingWindow(usize),
    PlotMode(PlotMode),
    UpdateKde,
}

impl ControlsPanel {
    pub fn new(
        columns: Vec<String>,
        selected_column: Option<String>,
        window: (i64, i64),
        bounds: (i64, i64),
        smoothing_window: usize,
        plot_mode: PlotMode,
    ) -> Self {
        Self {
            columns,
            selected_column,
            window,
            bounds,
            smoothing_window,
            plot_mode,
        }
    }

    fn render_column_selector(&mut self, ui: &mut Ui) -> Option<String> {
        let mut changed = None;

        ui.label(colored_subsection_heading(UI_TEXT.column_heading));
        let selected_text = self.selected_column.clone().unwrap_or_default();
        ComboBox::from_id_salt("column_selector")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for column in &self.columns {
                    let is_selected = self.selected_column.as_deref() == Some(column.as_str());
                    if ui.selectable_label(is_selected, column).clicked() && !is_selected {
                        self.selected_column = Some(column.clone());
                        changed = Some(column.clone());
                    }
                }
            });

        changed
    }

    fn render_time_range(&mut self, ui: &mut Ui) -> Option<(i64, i64)> {
        ui.label(colored_subsection_heading(UI_TEXT.time_range_heading));

        let (min, max) = self.bounds;
        let (mut lo, mut hi) = self.window;
        let mut changed = false;

        // Each bound is limited by the other, so lo <= hi holds structurally.
        changed |= ui
            .add(Slider::new(&mut lo, min..=hi).integer().prefix("from "))
            .changed();
        changed |= ui
            .add(Slider::new(&mut hi, lo..=max).integer().prefix("to "))
            .changed();

        changed.then_some((lo, hi))
    }

    fn render_smoothing_window(&mut self, ui: &mut Ui) -> Option<usize> {
        ui.label(colored_subsection_heading(UI_TEXT.smoothing_heading));

        let mut window = self.smoothing_window;
        let response = ui.add(
            Slider::new(&mut window, SMOOTHING_WINDOW_MIN..=SMOOTHING_WINDOW_MAX)
                .integer()
                .suffix(" samples"),
        );

        response.changed().then_some(window)
    }

    fn render_plot_mode(&mut self, ui: &mut Ui) -> Option<PlotMode> {
        ui.label(colored_subsection_heading(UI_TEXT.plot_mode_heading));

        let mut changed = None;
        ui.horizontal(|ui| {
            for mode in PlotMode::iter() {
                if ui
                    .radio_value(&mut self.plot_mode, mode, mode.to_string())
                    .clicked()
                    && changed.is_none()
                {
                    changed = Some(self.plot_mode);
                }
            }
        });

        changed
    }
}

impl Panel for ControlsPanel {
    type Event = ControlEventChanged;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.controls_heading);

        if let Some(column) = self.render_column_selector(ui) {
            events.push(ControlEventChanged::Column(column));
        }
        spaced_separator(ui);

        if let Some((lo, hi)) = self.render_time_range(ui) {
            events.push(ControlEventChanged::TimeWindow(lo, hi));
        }
        spaced_separator(ui);

        if let Some(window) = self.render_smoothing_window(ui) {
            events.push(ControlEventChanged::SmoothingWindow(window));
        }
        spaced_separator(ui);

        if let Some(mode) = self.render_plot_mode(ui) {
            events.push(ControlEventChanged::PlotMode(mode));
        }
        spaced_separator(ui);

        let button = ui
            .add(Button::new(UI_TEXT.update_kde_button))
            .on_hover_text(UI_TEXT.update_kde_tooltip);
        if button.clicked() {
            events.push(ControlEventChanged::UpdateKde);
        }

        ui.add_space(20.0);
        events
    }
}
