use eframe::{Frame, egui};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::analysis::{KdeHistory, compute_kde};
use crate::config::{
    DEFAULT_SMOOTHING_WINDOW, ENVIRONMENT_COLUMNS, SMOOTHING_WINDOW_MAX, SMOOTHING_WINDOW_MIN,
};
use crate::data::{AcquiredFile, DialogAcquirer, FileAcquirer, PathAcquirer, TimeSeriesTable};
use crate::errors::ScopeError;
use crate::models::{PlotMode, TimeWindow};
use crate::ui::utils::setup_custom_visuals;
use crate::Cli;

/// Which of the two inputs a load action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSlot {
    Metrics,
    Environment,
}

impl TableSlot {
    pub fn label(&self) -> &'static str {
        match self {
            TableSlot::Metrics => "metrics",
            TableSlot::Environment => "iControl",
        }
    }
}

/// Session-scoped runtime data. Created empty on first load, mutated only by
/// interaction handlers between frames, discarded when the session ends.
#[derive(Default)]
pub struct DataState {
    pub metrics: Option<TimeSeriesTable>,
    pub environment: Option<TimeSeriesTable>,
    pub kde_history: KdeHistory,
    /// Last expected, user-correctable failure; shown in the status bar.
    /// Never aborts the session and never touches accumulated history.
    pub last_error: Option<ScopeError>,
}

#[derive(Deserialize, Serialize)]
pub struct ReactionScopeApp {
    // Control state, persisted between sessions
    #[serde(default)]
    pub(super) selected_column: Option<String>,
    /// None means "full observed time range of the metrics file".
    #[serde(default)]
    pub(super) time_window: Option<(i64, i64)>,
    #[serde(default = "default_smoothing_window")]
    pub(super) smoothing_window: usize,
    #[serde(default)]
    pub(super) plot_mode: PlotMode,

    // Cached file-path selections so a restart can reload the same files
    #[serde(default)]
    pub(super) metrics_path: Option<PathBuf>,
    #[serde(default)]
    pub(super) environment_path: Option<PathBuf>,

    // Runtime-only data, rebuilt each session
    #[serde(skip)]
    pub(super) data_state: DataState,
    #[serde(skip, default = "default_acquirer")]
    pub(super) acquirer: Box<dyn FileAcquirer>,
}

fn default_smoothing_window() -> usize {
    DEFAULT_SMOOTHING_WINDOW
}

fn default_acquirer() -> Box<dyn FileAcquirer> {
    Box::new(DialogAcquirer)
}

impl ReactionScopeApp {
    pub fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: ReactionScopeApp;

        // Attempt to load the persisted control state
        if let Some(storage) = cc.storage {
            if let Some(value) = eframe::get_value(storage, eframe::APP_KEY) {
                log::info!("Loaded persisted control state");
                app = value;
            } else {
                log::info!("No persisted state found, starting fresh");
                app = ReactionScopeApp::new_with_initial_state();
            }
        } else {
            app = ReactionScopeApp::new_with_initial_state();
        }

        app.smoothing_window = app
            .smoothing_window
            .clamp(SMOOTHING_WINDOW_MIN, SMOOTHING_WINDOW_MAX);

        // CLI paths win over cached selections from the previous session
        let metrics_path = args.metrics_file.or(app.metrics_path.take());
        let environment_path = args.environment_file.or(app.environment_path.take());
        app.preload_slot(TableSlot::Metrics, metrics_path);
        app.preload_slot(TableSlot::Environment, environment_path);

        app
    }

    pub fn new_with_initial_state() -> Self {
        Self {
            selected_column: None,
            time_window: None,
            smoothing_window: default_smoothing_window(),
            plot_mode: PlotMode::default(),
            metrics_path: None,
            environment_path: None,
            data_state: DataState::default(),
            acquirer: default_acquirer(),
        }
    }

    /// Reloads a table from a known path at startup. Failure here is not a
    /// session error: the file may have moved since last time, so we log and
    /// fall back to the picker.
    fn preload_slot(&mut self, slot: TableSlot, path: Option<PathBuf>) {
        let Some(path) = path else { return };
        let acquirer = PathAcquirer::new(&path);
        match acquirer.acquire("") {
            Ok(Some(file)) => {
                if let Err(e) = self.install_table(slot, file) {
                    log::warn!("Preload of {} file failed: {e}", slot.label());
                }
            }
            Ok(None) => {}
            Err(e) => log::warn!("Cannot reload cached {} path: {e}", slot.label()),
        }
    }

    /// Opens the acquisition dialog for one slot and installs the result.
    /// Cancelling the picker changes nothing.
    pub(super) fn load_table_interactive(&mut self, slot: TableSlot) {
        let prompt = match slot {
            TableSlot::Metrics => crate::ui::config::UI_TEXT.metrics_prompt,
            TableSlot::Environment => crate::ui::config::UI_TEXT.environment_prompt,
        };

        match self.acquirer.acquire(prompt) {
            Ok(Some(file)) => {
                if let Err(e) = self.install_table(slot, file) {
                    log::error!("Loading {} file failed: {e}", slot.label());
                    self.data_state.last_error = Some(e);
                }
            }
            Ok(None) => {}
            Err(e) => {
                log::error!("File acquisition failed: {e}");
                self.data_state.last_error = Some(e);
            }
        }
    }

    /// Parses and validates an acquired file and installs it into its slot,
    /// then re-syncs the controls (column selection, window clamping).
    pub(super) fn install_table(
        &mut self,
        slot: TableSlot,
        file: AcquiredFile,
    ) -> Result<(), ScopeError> {
        let table = TimeSeriesTable::from_csv_bytes(&file.name, &file.bytes)?;

        match slot {
            TableSlot::Metrics => {
                self.data_state.metrics = Some(table);
                self.metrics_path = Some(file.path);
                self.sync_selected_column();
                self.clamp_time_window();
            }
            TableSlot::Environment => {
                table.require_columns(&ENVIRONMENT_COLUMNS)?;
                self.data_state.environment = Some(table);
                self.environment_path = Some(file.path);
            }
        }

        log::info!("Loaded {} file '{}'", slot.label(), file.name);
        self.data_state.last_error = None;
        Ok(())
    }

    /// Keeps the selected column valid against the current metrics table,
    /// defaulting to the first value column.
    fn sync_selected_column(&mut self) {
        let Some(metrics) = &self.data_state.metrics else {
            return;
        };
        let columns = metrics.column_names();
        let still_valid = self
            .selected_column
            .as_deref()
            .is_some_and(|c| columns.contains(&c));
        if !still_valid {
            self.selected_column = columns.first().map(|c| c.to_string());
        }
    }

    /// Observed integer Time bounds of the metrics file; the range control is
    /// clamped to these, matching the source behavior.
    pub(super) fn observed_time_bounds(&self) -> Option<(i64, i64)> {
        let (min, max) = self.data_state.metrics.as_ref()?.time_bounds()?;
        Some((min.floor() as i64, max.ceil() as i64))
    }

    pub(super) fn clamp_time_window(&mut self) {
        let Some((min, max)) = self.observed_time_bounds() else {
            return;
        };
        if let Some((lo, hi)) = self.time_window {
            let lo = lo.clamp(min, max);
            let hi = hi.clamp(lo, max);
            self.time_window = Some((lo, hi));
        }
    }

    /// The active window: the user's selection, or the full observed range
    /// while no selection has been made yet.
    pub(super) fn current_window(&self) -> Option<TimeWindow> {
        if let Some((lo, hi)) = self.time_window {
            return Some(TimeWindow::new(lo as f64, hi as f64));
        }
        let (min, max) = self.observed_time_bounds()?;
        Some(TimeWindow::new(min as f64, max as f64))
    }

    /// The explicit, user-initiated step: fits a KDE over the selected column
    /// within the current window and appends the snapshot to history.
    pub(super) fn update_kde(&mut self) {
        let result = self.compute_kde_snapshot();
        match result {
            Ok(()) => {
                self.data_state.last_error = None;
                log::info!(
                    "KDE history now holds {} snapshot(s)",
                    self.data_state.kde_history.len()
                );
            }
            Err(e) => {
                log::warn!("KDE update rejected: {e}");
                self.data_state.last_error = Some(e);
            }
        }
    }

    fn compute_kde_snapshot(&mut self) -> Result<(), ScopeError> {
        let metrics = self
            .data_state
            .metrics
            .as_ref()
            .ok_or(ScopeError::MissingInput("metrics"))?;
        let column = self
            .selected_column
            .clone()
            .ok_or(ScopeError::MissingInput("metrics"))?;
        let window = self
            .current_window()
            .ok_or(ScopeError::MissingInput("metrics"))?;

        let filtered = metrics.filter_by_window(window);
        let values = filtered
            .column(&column)
            .ok_or_else(|| ScopeError::Parse(format!("column '{column}' disappeared")))?;

        let record = compute_kde(values, window, &column)?;
        self.data_state.kde_history.push(record);
        Ok(())
    }
}

impl eframe::App for ReactionScopeApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.render_side_panel(ctx);
        self.render_central_panel(ctx);
        self.render_status_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acquired(name: &str, bytes: &[u8]) -> AcquiredFile {
        AcquiredFile {
            name: name.to_string(),
            path: PathBuf::from(name),
            bytes: bytes.to_vec(),
        }
    }

    fn app_with_both_tables() -> ReactionScopeApp {
        let mut app = ReactionScopeApp::new_with_initial_state();
        app.install_table(
            TableSlot::Metrics,
            acquired(
                "metrics.csv",
                b"Time,X\n0,10\n1,20\n2,30\n3,40\n4,50\n",
            ),
        )
        .unwrap();
        app.install_table(
            TableSlot::Environment,
            acquired(
                "icontrol.csv",
                b"Time,Temperature,Volume\n0,1,5\n1,2,4\n2,3,3\n3,4,2\n4,5,1\n",
            ),
        )
        .unwrap();
        app
    }

    #[test]
    fn test_install_defaults_column_and_bounds() {
        let app = app_with_both_tables();
        assert_eq!(app.selected_column.as_deref(), Some("X"));
        assert_eq!(app.observed_time_bounds(), Some((0, 4)));
        // No explicit selection yet: window covers the full range
        assert_eq!(app.current_window(), Some(TimeWindow::new(0.0, 4.0)));
    }

    #[test]
    fn test_environment_schema_is_enforced() {
        let mut app = ReactionScopeApp::new_with_initial_state();
        let err = app
            .install_table(
                TableSlot::Environment,
                acquired("bad.csv", b"Time,Temperature\n0,1\n1,2\n"),
            )
            .unwrap_err();
        assert!(matches!(err, ScopeError::Parse(msg) if msg.contains("Volume")));
        assert!(app.data_state.environment.is_none());
    }

    #[test]
    fn test_end_to_end_window_selection() {
        // Spec scenario: window [1, 3] over 5-row metrics and environment
        // tables keeps exactly the 3 middle rows on both sides.
        let mut app = app_with_both_tables();
        app.time_window = Some((1, 3));
        app.clamp_time_window();

        let window = app.current_window().unwrap();
        let metrics = app.data_state.metrics.as_ref().unwrap();
        let environment = app.data_state.environment.as_ref().unwrap();

        let filtered_metrics = metrics.filter_by_window(window);
        assert_eq!(filtered_metrics.time(), &[1.0, 2.0, 3.0]);
        assert_eq!(filtered_metrics.column("X").unwrap(), &[20.0, 30.0, 40.0]);

        let filtered_env = environment.filter_by_window(window);
        assert_eq!(filtered_env.row_count(), 3);
        assert_eq!(
            filtered_env.column("Temperature").unwrap(),
            &[2.0, 3.0, 4.0]
        );
        assert_eq!(filtered_env.column("Volume").unwrap(), &[4.0, 3.0, 2.0]);
    }

    #[test]
    fn test_repeated_kde_triggers_accumulate() {
        let mut app = app_with_both_tables();
        app.time_window = Some((1, 3));

        app.update_kde();
        app.update_kde();

        assert_eq!(app.data_state.kde_history.len(), 2);
        assert!(app.data_state.last_error.is_none());
        let rendered: Vec<_> = app.data_state.kde_history.records_for("X").collect();
        assert_eq!(rendered.len(), 2);
    }

    #[test]
    fn test_degenerate_kde_keeps_history_and_reports_error() {
        let mut app = ReactionScopeApp::new_with_initial_state();
        app.install_table(
            TableSlot::Metrics,
            acquired("metrics.csv", b"Time,X\n0,7\n1,7\n2,7\n"),
        )
        .unwrap();

        app.update_kde(); // zero variance -> rejected
        assert_eq!(
            app.data_state.last_error,
            Some(ScopeError::InsufficientData(3))
        );
        assert!(app.data_state.kde_history.is_empty());

        // An empty window is rejected the same way, not a crash
        app.time_window = Some((0, 0));
        app.update_kde();
        assert_eq!(
            app.data_state.last_error,
            Some(ScopeError::InsufficientData(1))
        );
    }

    #[test]
    fn test_kde_without_metrics_is_missing_input() {
        let mut app = ReactionScopeApp::new_with_initial_state();
        app.update_kde();
        assert_eq!(
            app.data_state.last_error,
            Some(ScopeError::MissingInput("metrics"))
        );
    }

    #[test]
    fn test_window_clamps_to_observed_range() {
        let mut app = app_with_both_tables();
        app.time_window = Some((-10, 99));
        app.clamp_time_window();
        assert_eq!(app.time_window, Some((0, 4)));
    }
}
