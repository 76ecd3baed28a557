//! Descriptive statistics over indicator series.
//!
//! These functions operate on plain value slices extracted from a series
//! (see `Series::field_values`). Degenerate inputs produce well-defined
//! sentinel results instead of errors, matching how the dashboard consumes
//! them: a zero rate or an empty window, never a failure state.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Result of a least-squares linear fit over an evenly spaced series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    /// Change in value per step along the series.
    pub slope: f64,
    /// Fitted value at the first point of the series.
    pub intercept: f64,
    /// Share of the variation the fit explains, 1.0 for a perfect line.
    pub r_squared: f64,
}

/// Computes the compound annual growth rate between two values.
///
/// Returns 0 when the start value is not positive or the year span is zero,
/// where the rate is undefined.
pub fn compute_cagr(start_value: f64, end_value: f64, years: f64) -> f64 {
    if start_value <= 0.0 || years == 0.0 {
        debug!(start_value, years, "CAGR undefined for input, returning 0");
        return 0.0;
    }
    (end_value / start_value).powf(1.0 / years) - 1.0
}

/// Computes the growth rate of the current value over the previous one.
///
/// Returns 0 when the previous value is zero.
pub fn compute_yoy_growth(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    (current - previous) / previous
}

/// Computes a sliding arithmetic mean over the values.
///
/// Produces `len - window + 1` results; a zero window or a series shorter
/// than the window yields no results.
#[instrument(skip(values), fields(len = values.len()))]
pub fn compute_moving_average(values: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || values.len() < window {
        debug!(window, "window does not fit the series, returning empty");
        return Vec::new();
    }
    values
        .windows(window)
        .map(|slice| slice.iter().sum::<f64>() / window as f64)
        .collect()
}

/// Fits a least-squares line over the values, with the step index as x.
///
/// Returns the all-zero result for fewer than two values. The fit itself is
/// not guarded against a zero variance denominator; constant input yields a
/// NaN `r_squared` through ordinary IEEE propagation, and callers that need
/// a defined answer there check `is_finite` on the result.
#[instrument(skip(values), fields(len = values.len()))]
pub fn compute_linear_regression(values: &[f64]) -> RegressionResult {
    let n = values.len();
    if n < 2 {
        debug!(n, "not enough values for a fit, returning zero result");
        return RegressionResult {
            slope: 0.0,
            intercept: 0.0,
            r_squared: 0.0,
        };
    }

    let count = n as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x_squared = 0.0;
    for (index, value) in values.iter().enumerate() {
        let x = index as f64;
        sum_x += x;
        sum_y += value;
        sum_xy += x * value;
        sum_x_squared += x * x;
    }

    let slope = (count * sum_xy - sum_x * sum_y) / (count * sum_x_squared - sum_x * sum_x);
    let intercept = (sum_y - slope * sum_x) / count;

    let mean_y = sum_y / count;
    let total_variation: f64 = values.iter().map(|y| (y - mean_y).powi(2)).sum();
    let explained_variation: f64 = (0..n)
        .map(|index| {
            let predicted = slope * index as f64 + intercept;
            (predicted - mean_y).powi(2)
        })
        .sum();
    let r_squared = explained_variation / total_variation;

    RegressionResult {
        slope,
        intercept,
        r_squared,
    }
}

/// Computes the Pearson correlation coefficient of two series.
///
/// Returns 0 when the series differ in length, have fewer than two points,
/// or either side has no variance.
#[instrument(skip(xs, ys), fields(len = xs.len()))]
pub fn compute_correlation(xs: &[f64], ys: &[f64]) -> f64 {
    if xs.len() != ys.len() || xs.len() < 2 {
        debug!(
            xs = xs.len(),
            ys = ys.len(),
            "series not comparable, returning 0"
        );
        return 0.0;
    }

    let count = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / count;
    let mean_y = ys.iter().sum::<f64>() / count;

    let mut covariance = 0.0;
    let mut variance_x = 0.0;
    let mut variance_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        variance_x += dx * dx;
        variance_y += dy * dy;
    }

    let denominator = (variance_x * variance_y).sqrt();
    if denominator.abs() < 1e-10 {
        debug!("zero variance on one side, returning 0");
        return 0.0;
    }
    covariance / denominator
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::assert_f64_eq;

    #[test]
    fn test_cagr_doubling_example() {
        // 100 -> 121 over two years is exactly 10% per year.
        assert_f64_eq(compute_cagr(100.0, 121.0, 2.0), 0.1, 1e-10);
    }

    #[test]
    fn test_cagr_degenerate_inputs() {
        assert_eq!(compute_cagr(0.0, 121.0, 2.0), 0.0);
        assert_eq!(compute_cagr(-5.0, 121.0, 2.0), 0.0);
        assert_eq!(compute_cagr(100.0, 121.0, 0.0), 0.0);
    }

    #[test]
    fn test_cagr_declining_series_is_negative() {
        let rate = compute_cagr(121.0, 100.0, 2.0);
        assert!(rate < 0.0);
        assert_f64_eq((1.0 + rate) * (1.0 + rate) * 121.0, 100.0, 1e-9);
    }

    #[test]
    fn test_yoy_growth() {
        assert_f64_eq(compute_yoy_growth(503707.0, 500857.0), 2850.0 / 500857.0, 1e-12);
        assert_f64_eq(compute_yoy_growth(9.8, 10.3), (9.8 - 10.3) / 10.3, 1e-12);
        assert_eq!(compute_yoy_growth(5.0, 0.0), 0.0);
    }

    #[test]
    fn test_moving_average_example() {
        let result = compute_moving_average(&[1.0, 2.0, 3.0, 4.0, 5.0], 2);
        assert_eq!(result.len(), 4);
        for (actual, expected) in result.iter().zip([1.5, 2.5, 3.5, 4.5]) {
            assert_f64_eq(*actual, expected, 1e-10);
        }
    }

    #[test]
    fn test_moving_average_window_edge_cases() {
        assert!(compute_moving_average(&[1.0, 2.0], 0).is_empty());
        assert!(compute_moving_average(&[1.0, 2.0], 3).is_empty());
        // Window equal to the length collapses to a single mean.
        let result = compute_moving_average(&[2.0, 4.0, 6.0], 3);
        assert_eq!(result.len(), 1);
        assert_f64_eq(result[0], 4.0, 1e-10);
    }

    #[test]
    fn test_regression_perfect_line() {
        let result = compute_linear_regression(&[0.0, 1.0, 2.0]);
        assert_f64_eq(result.slope, 1.0, 1e-10);
        assert_f64_eq(result.intercept, 0.0, 1e-10);
        assert_f64_eq(result.r_squared, 1.0, 1e-10);
    }

    #[test]
    fn test_regression_with_intercept() {
        // y = 2x + 5
        let result = compute_linear_regression(&[5.0, 7.0, 9.0, 11.0]);
        assert_f64_eq(result.slope, 2.0, 1e-10);
        assert_f64_eq(result.intercept, 5.0, 1e-10);
        assert_f64_eq(result.r_squared, 1.0, 1e-10);
    }

    #[test]
    fn test_regression_short_input_returns_zero_result() {
        let result = compute_linear_regression(&[42.0]);
        assert_eq!(result.slope, 0.0);
        assert_eq!(result.intercept, 0.0);
        assert_eq!(result.r_squared, 0.0);
    }

    #[test]
    fn test_regression_constant_input_propagates_nan() {
        // Zero total variation is deliberately unguarded.
        let result = compute_linear_regression(&[3.0, 3.0, 3.0]);
        assert_f64_eq(result.slope, 0.0, 1e-10);
        assert!(result.r_squared.is_nan());
    }

    #[test]
    fn test_correlation_perfect_positive() {
        let coefficient = compute_correlation(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]);
        assert_f64_eq(coefficient, 1.0, 1e-10);
    }

    #[test]
    fn test_correlation_perfect_negative() {
        let coefficient = compute_correlation(&[1.0, 2.0, 3.0], &[6.0, 4.0, 2.0]);
        assert_f64_eq(coefficient, -1.0, 1e-10);
    }

    #[test]
    fn test_correlation_degenerate_inputs() {
        assert_eq!(compute_correlation(&[1.0, 2.0], &[1.0, 2.0, 3.0]), 0.0);
        assert_eq!(compute_correlation(&[1.0], &[2.0]), 0.0);
        // No variance on one side.
        assert_eq!(compute_correlation(&[1.0, 2.0, 3.0], &[5.0, 5.0, 5.0]), 0.0);
    }
}
