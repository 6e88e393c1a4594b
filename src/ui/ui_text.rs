/// All user-visible strings in one place so wording stays consistent between
/// panels, tooltips and the status bar.
pub struct UiText {
    pub files_heading: &'static str,
    pub metrics_button: &'static str,
    pub environment_button: &'static str,
    pub metrics_prompt: &'static str,
    pub environment_prompt: &'static str,
    pub metrics_label: &'static str,
    pub environment_label: &'static str,

    pub controls_heading: &'static str,
    pub column_heading: &'static str,
    pub time_range_heading: &'static str,
    pub smoothing_heading: &'static str,
    pub plot_mode_heading: &'static str,
    pub update_kde_button: &'static str,
    pub update_kde_tooltip: &'static str,

    pub waiting_for_files: &'static str,
    pub density_empty_hint: &'static str,

    pub time_axis: &'static str,
    pub environment_axis: &'static str,
    pub density_axis: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    files_heading: "Input Files",
    metrics_button: "Load metrics CSV…",
    environment_button: "Load iControl CSV…",
    metrics_prompt: "Select the event tracking metrics CSV file",
    environment_prompt: "Select the iControl data CSV file",
    metrics_label: "metrics",
    environment_label: "iControl",

    controls_heading: "Controls",
    column_heading: "Data Column",
    time_range_heading: "Time Range",
    smoothing_heading: "Smoothing Window Size",
    plot_mode_heading: "Plot Type",
    update_kde_button: "Update KDE",
    update_kde_tooltip: "Fit a density estimate over the current column and time window, \
                         and keep it on the density chart",

    waiting_for_files: "Please load both files to proceed.",
    density_empty_hint: "No density snapshots yet for this column. \
                         Press 'Update KDE' to capture one.",

    time_axis: "Time [hour]",
    environment_axis: "Temperature / Volume",
    density_axis: "Density",
};
