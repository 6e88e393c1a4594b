// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use analysis::{GaussianKde, KdeHistory, compute_kde, moving_average};
pub use data::{AcquiredFile, FileAcquirer, TimeSeriesTable};
pub use errors::{ScopeError, ScopeResult};
pub use models::{KdeRecord, PlotMode, TimeWindow};
pub use ui::ReactionScopeApp;

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Preload the event tracking metrics CSV instead of using the file picker
    #[arg(long)]
    pub metrics_file: Option<PathBuf>,

    /// Preload the iControl temperature/volume CSV instead of using the file picker
    #[arg(long)]
    pub environment_file: Option<PathBuf>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, args: Cli) -> Box<dyn eframe::App> {
    let app = ui::ReactionScopeApp::new(cc, args);
    Box::new(app)
}
