use thermoqc::math::stats::{lower_median, mad_lower, mean, relative_sd_pct, sample_sd};

#[test]
fn mean_basic() {
    assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
    assert_eq!(mean(&[]), 0.0);
}

#[test]
fn sample_sd_basic() {
    let sd = sample_sd(&[1.0, 2.0, 3.0]);
    assert!((sd - 1.0).abs() < 1e-12);
}

#[test]
fn sample_sd_degenerate() {
    assert_eq!(sample_sd(&[5.0]), 0.0);
    assert_eq!(sample_sd(&[]), 0.0);
}

#[test]
fn relative_sd_pct_basic() {
    let rel = relative_sd_pct(&[10.0, 14.0, 18.0]);
    assert!((rel - 400.0 / 14.0).abs() < 1e-9);
}

#[test]
fn relative_sd_pct_zero_mean_not_finite() {
    // mean 0 must not panic; callers treat non-finite as below threshold
    let rel = relative_sd_pct(&[-1.0, 1.0]);
    assert!(!rel.is_finite());
}

#[test]
fn lower_median_odd() {
    let mut v = vec![3.0, 1.0, 2.0];
    assert_eq!(lower_median(&mut v), 2.0);
}

#[test]
fn lower_median_even_picks_index_n_over_2() {
    // No interpolation: sorted [1,2,3,4] yields element at index 2.
    let mut v = vec![4.0, 1.0, 2.0, 3.0];
    assert_eq!(lower_median(&mut v), 3.0);
}

#[test]
fn mad_lower_basic() {
    let mut v = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let med = lower_median(&mut v.clone());
    let m = mad_lower(&mut v, med);
    assert!((m - 1.0).abs() < 1e-12);
}

#[test]
fn mad_lower_tied_values() {
    // [1, 1, 50]: median 1, deviations sorted [0, 0, 49] -> MAD 0
    let mut v = vec![1.0, 1.0, 50.0];
    let med = lower_median(&mut v.clone());
    assert_eq!(med, 1.0);
    let m = mad_lower(&mut v, med);
    assert_eq!(m, 0.0);
}
