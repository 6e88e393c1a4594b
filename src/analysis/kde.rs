use itertools::Itertools;
use statrs::distribution::{Continuous, Normal};

use crate::config::{KDE_GRID_POINTS, KDE_PAD_FRACTION};
use crate::errors::{ScopeError, ScopeResult};
use crate::models::{KdeRecord, TimeWindow};
use crate::utils::maths_utils::{linspace, sample_std};

/// A fitted Gaussian kernel density estimate.
///
/// Pure and UI-free so it can be swapped or property-tested independently of
/// the charting layer.
#[derive(Debug, Clone)]
pub struct GaussianKde {
    samples: Vec<f64>,
    kernel: Normal,
}

impl GaussianKde {
    /// Fits the estimate with Scott's-rule bandwidth (`sigma * n^(-1/5)`).
    ///
    /// Fewer than 2 values, or fewer than 2 distinct values, make the
    /// estimate singular and fail with `InsufficientData` instead of
    /// propagating a numeric exception.
    pub fn fit(values: &[f64]) -> ScopeResult<Self> {
        let distinct = values
            .iter()
            .map(|v| v.to_bits())
            .unique()
            .take(2)
            .count();
        if values.len() < 2 || distinct < 2 {
            return Err(ScopeError::InsufficientData(values.len()));
        }

        let bandwidth = sample_std(values) * (values.len() as f64).powf(-0.2);
        // std > 0 is guaranteed by the distinct-values check above
        let kernel = Normal::new(0.0, bandwidth)
            .map_err(|_| ScopeError::InsufficientData(values.len()))?;

        Ok(Self {
            samples: values.to_vec(),
            kernel,
        })
    }

    /// Estimated density at `x`: the mean of the kernel evaluated at the
    /// distance to every sample.
    pub fn evaluate(&self, x: f64) -> f64 {
        let sum: f64 = self.samples.iter().map(|&s| self.kernel.pdf(x - s)).sum();
        sum / self.samples.len() as f64
    }

    /// The fixed 100-point sampling grid: evenly spaced over the sample range
    /// padded by 10% on each side so the tails are not clipped.
    pub fn grid(&self) -> Vec<f64> {
        let (min, max) = crate::utils::maths_utils::get_min_max(&self.samples);
        let pad = KDE_PAD_FRACTION * (max - min);
        linspace(min - pad, max + pad, KDE_GRID_POINTS)
    }
}

/// Fits a KDE to the supplied column slice and samples it on the fixed grid,
/// tagging the result with the originating window and column for traceability.
pub fn compute_kde(values: &[f64], window: TimeWindow, column: &str) -> ScopeResult<KdeRecord> {
    let kde = GaussianKde::fit(values)?;
    let x = kde.grid();
    let density = x.iter().map(|&xi| kde.evaluate(xi)).collect();
    Ok(KdeRecord {
        x,
        density,
        window,
        column: column.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_variance_input_is_insufficient() {
        let err = GaussianKde::fit(&[1.0, 1.0, 1.0]).unwrap_err();
        assert_eq!(err, ScopeError::InsufficientData(3));
    }

    #[test]
    fn test_too_few_values_is_insufficient() {
        assert_eq!(
            GaussianKde::fit(&[]).unwrap_err(),
            ScopeError::InsufficientData(0)
        );
        assert_eq!(
            GaussianKde::fit(&[7.0]).unwrap_err(),
            ScopeError::InsufficientData(1)
        );
    }

    #[test]
    fn test_grid_spans_padded_range_with_100_points() {
        let record = compute_kde(&[0.0, 10.0], TimeWindow::new(0.0, 4.0), "X").unwrap();
        assert_eq!(record.x.len(), 100);
        assert_eq!(record.density.len(), 100);
        // 10% padding of range 10 on both ends
        assert!((record.x[0] - -1.0).abs() < 1e-9);
        assert!((record.x[99] - 11.0).abs() < 1e-9);
        // Monotonically increasing grid
        assert!(record.x.windows(2).all(|w| w[1] > w[0]));
        assert_eq!(record.window, TimeWindow::new(0.0, 4.0));
        assert_eq!(record.column, "X");
    }

    #[test]
    fn test_density_is_finite_and_non_negative() {
        let record = compute_kde(&[1.0, 2.0, 2.5, 3.0, 7.0], TimeWindow::new(0.0, 4.0), "X")
            .unwrap();
        assert!(record.density.iter().all(|d| d.is_finite() && *d >= 0.0));
    }

    #[test]
    fn test_density_integrates_to_one() {
        let values = [1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 5.0];
        let kde = GaussianKde::fit(&values).unwrap();

        // Trapezoid rule over a range wide enough to hold essentially all mass
        let xs = linspace(-20.0, 26.0, 4001);
        let step = xs[1] - xs[0];
        let integral: f64 = xs
            .windows(2)
            .map(|w| 0.5 * (kde.evaluate(w[0]) + kde.evaluate(w[1])) * step)
            .sum();
        assert!((integral - 1.0).abs() < 1e-3, "integral was {integral}");
    }

    #[test]
    fn test_density_peaks_near_the_mean_of_symmetric_data() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let kde = GaussianKde::fit(&values).unwrap();
        let at_mean = kde.evaluate(3.0);
        assert!(at_mean > kde.evaluate(0.0));
        assert!(at_mean > kde.evaluate(6.0));
        // Symmetry of the estimate around the sample mean
        assert!((kde.evaluate(2.0) - kde.evaluate(4.0)).abs() < 1e-12);
    }
}
