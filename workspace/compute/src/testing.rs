//! Shared fixtures for compute tests.
//!
//! The scenario types bundle a hand-built series with its hand-computed
//! expectations so the forecast and analytics tests assert against the same
//! numbers.

use std::collections::BTreeMap;

use model::{Period, Quarter, Series, SeriesPoint};

use crate::forecast::AdjustmentFactors;

/// Builds an annual series carrying a single field, one point per year
/// starting at `start_year`.
pub fn annual_series(start_year: i32, field: &str, values: &[f64]) -> Series {
    let points = values
        .iter()
        .enumerate()
        .map(|(offset, value)| {
            SeriesPoint::new(Period::year(start_year + offset as i32), BTreeMap::new())
                .with_value(field, *value)
        })
        .collect();
    Series::new(points).expect("annual fixture periods are ascending")
}

/// Builds a quarterly series carrying a single field, one point per quarter
/// starting at `start_year` Q1.
pub fn quarterly_series(start_year: i32, field: &str, values: &[f64]) -> Series {
    const QUARTERS: [Quarter; 4] = [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4];

    let points = values
        .iter()
        .enumerate()
        .map(|(offset, value)| {
            let period = Period::quarterly(
                start_year + (offset / 4) as i32,
                QUARTERS[offset % 4],
            );
            SeriesPoint::new(period, BTreeMap::new()).with_value(field, *value)
        })
        .collect();
    Series::new(points).expect("quarterly fixture periods are ascending")
}

/// Asserts two floats are within `epsilon` of each other.
pub fn assert_f64_eq(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "expected {expected}, got {actual} (epsilon {epsilon})"
    );
}

/// A steady 10% growth series with the projections that follow from it.
///
/// The last two points fix the rate at exactly 0.1, so step `i` of an
/// unadjusted forecast must be `121 * 1.1^i` rounded to one decimal.
pub struct ScenarioSteadyGrowth {
    pub series: Series,
    pub expected_rate: f64,
    pub expected_steps: Vec<f64>,
}

impl ScenarioSteadyGrowth {
    pub fn new() -> Self {
        Self {
            series: annual_series(2020, "value", &[100.0, 110.0, 121.0]),
            expected_rate: 0.1,
            expected_steps: vec![133.1, 146.4, 161.1],
        }
    }
}

impl Default for ScenarioSteadyGrowth {
    fn default() -> Self {
        Self::new()
    }
}

/// A flat series: the naive rate is zero, so any projected movement comes
/// entirely from scenario adjustments.
pub struct ScenarioFlatline {
    pub series: Series,
    pub adjustments: AdjustmentFactors,
    pub expected_step_one: f64,
}

impl ScenarioFlatline {
    pub fn new_with_adjustment(rate: f64) -> Self {
        Self {
            series: annual_series(2022, "value", &[1000.0, 1000.0]),
            adjustments: AdjustmentFactors::new_with_rate("value", rate),
            expected_step_one: (1000.0 * (1.0 + rate) * 10.0).round() / 10.0,
        }
    }
}
