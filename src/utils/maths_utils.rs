use argminmax::ArgMinMax;

pub fn get_max(vec: &[f64]) -> f64 {
    let max_index: usize = vec.argmax();
    vec[max_index]
}

pub fn get_min(vec: &[f64]) -> f64 {
    let min_index: usize = vec.argmin();
    vec[min_index]
}

pub fn get_min_max(vec: &[f64]) -> (f64, f64) {
    (get_min(vec), get_max(vec))
}

/// `n` evenly spaced points from `start` to `end` inclusive.
/// With `n == 1` the single point is `start`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![start];
    }
    let step = (end - start) / (n - 1) as f64;
    (0..n).map(|i| start + step * i as f64).collect()
}

pub fn mean(vec: &[f64]) -> f64 {
    vec.iter().sum::<f64>() / vec.len() as f64
}

/// Sample standard deviation (N-1 denominator), matching the convention the
/// usual KDE bandwidth rules are stated in.
pub fn sample_std(vec: &[f64]) -> f64 {
    let m = mean(vec);
    let sum_sq: f64 = vec.iter().map(|&x| (x - m) * (x - m)).sum();
    (sum_sq / (vec.len() - 1) as f64).sqrt()
}
