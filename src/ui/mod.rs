// User interface components
pub mod app;
pub mod config;
pub mod ui_panels;
pub mod ui_plot_view;
pub mod ui_render;
pub mod ui_text;
pub mod utils;
pub mod styles;

// Re-export main app
pub use app::ReactionScopeApp;
pub use config::UI_CONFIG;
