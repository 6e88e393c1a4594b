/// Trailing simple moving average over a single numeric column.
///
/// The first `window - 1` outputs are `None`: there is not enough history yet,
/// and consumers must render those as gaps, never as zero. A window larger
/// than the series yields an all-`None` output, which is valid.
pub fn moving_average(values: &[f64], window: usize) -> Vec<Option<f64>> {
    debug_assert!(window >= 1, "smoothing window must be a positive integer");
    let window = window.max(1);

    let mut out = Vec::with_capacity(values.len());
    let mut running_sum = 0.0;

    for (i, &value) in values.iter().enumerate() {
        running_sum += value;
        if i + 1 > window {
            running_sum -= values[i + 1 - window - 1];
        }
        if i + 1 >= window {
            out.push(Some(running_sum / window as f64));
        } else {
            out.push(None);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_of_one_is_identity() {
        let series = [10.0, 20.0, 30.0];
        let smoothed = moving_average(&series, 1);
        assert_eq!(smoothed, vec![Some(10.0), Some(20.0), Some(30.0)]);
    }

    #[test]
    fn test_leading_gap_has_exactly_window_minus_one_entries() {
        let series = [1.0, 2.0, 3.0, 4.0, 5.0];
        for k in 1..=series.len() {
            let smoothed = moving_average(&series, k);
            let gap = smoothed.iter().take_while(|v| v.is_none()).count();
            assert_eq!(gap, k - 1, "window {k}");
            assert!(smoothed[gap..].iter().all(|v| v.is_some()));
        }
    }

    #[test]
    fn test_trailing_mean_values() {
        let series = [1.0, 2.0, 3.0, 4.0, 5.0];
        let smoothed = moving_average(&series, 3);
        assert_eq!(smoothed[0], None);
        assert_eq!(smoothed[1], None);
        assert_eq!(smoothed[2], Some(2.0));
        assert_eq!(smoothed[3], Some(3.0));
        assert_eq!(smoothed[4], Some(4.0));
    }

    #[test]
    fn test_window_larger_than_series_is_all_gaps() {
        let series = [1.0, 2.0, 3.0];
        let smoothed = moving_average(&series, 10);
        assert_eq!(smoothed, vec![None, None, None]);
    }

    #[test]
    fn test_empty_series() {
        assert!(moving_average(&[], 5).is_empty());
    }
}
