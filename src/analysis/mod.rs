// Analysis pipeline: moving-average smoothing and Gaussian KDE with an
// append-only history of density snapshots.
pub mod history;
pub mod kde;
pub mod smoothing;

pub use history::KdeHistory;
pub use kde::{GaussianKde, compute_kde};
pub use smoothing::moving_average;
