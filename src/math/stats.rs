//! Statistical primitives for replicate screening.
//!
//! Note: Functions taking `&mut` may reorder the input slice.

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n-1 denominator); 0.0 for fewer than 2 values.
pub fn sample_sd(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    (ss / (n - 1) as f64).sqrt()
}

/// Relative standard deviation as a percentage, `sd / mean * 100`.
///
/// Not guarded against mean 0; callers treat a non-finite result as "not
/// exceeding threshold".
pub fn relative_sd_pct(values: &[f64]) -> f64 {
    sample_sd(values) / mean(values) * 100.0
}

/// Lower median: `sorted[n / 2]`, no interpolation for even n.
///
/// The sanitizer's outlier bounds depend on this exact tie convention.
pub fn lower_median(values: &mut [f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap());
    values[values.len() / 2]
}

/// Median absolute deviation using the same lower-median convention.
pub fn mad_lower(values: &mut [f64], median_val: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    for v in values.iter_mut() {
        *v = (*v - median_val).abs();
    }
    lower_median(values)
}
