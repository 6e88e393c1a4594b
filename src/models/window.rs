use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed interval [lo, hi] over the numeric `Time` column.
///
/// Invariant: `lo <= hi`. The range control enforces it before a window is
/// ever constructed; `new` normalizes just in case a caller hands the bounds
/// in the wrong order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub lo: f64,
    pub hi: f64,
}

impl TimeWindow {
    pub fn new(lo: f64, hi: f64) -> Self {
        if hi < lo {
            Self { lo: hi, hi: lo }
        } else {
            Self { lo, hi }
        }
    }

    /// Inclusive membership test.
    pub fn contains(&self, time: f64) -> bool {
        time >= self.lo && time <= self.hi
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_reversed_bounds() {
        let w = TimeWindow::new(5.0, 2.0);
        assert_eq!(w.lo, 2.0);
        assert_eq!(w.hi, 5.0);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let w = TimeWindow::new(1.0, 3.0);
        assert!(w.contains(1.0));
        assert!(w.contains(3.0));
        assert!(w.contains(2.0));
        assert!(!w.contains(0.999));
        assert!(!w.contains(3.001));
    }

    #[test]
    fn test_display_format() {
        let w = TimeWindow::new(1.0, 3.0);
        assert_eq!(w.to_string(), "[1, 3]");
    }
}
