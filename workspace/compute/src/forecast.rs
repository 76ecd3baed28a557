//! Growth-rate extrapolation over indicator series.
//!
//! The projection takes the last observed period-over-period growth rate per
//! field, adds any scenario adjustment, and compounds it forward from the
//! last observed value. Each step is a power of the step index applied to
//! that last value, never a chain off the previous projected point, so a
//! rounded step does not feed rounding error into the next one.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace, warn};

use model::{Series, SeriesPoint};

use crate::error::Result;

/// Additive per-field rate adjustments applied on top of the naive growth
/// rate. Rates are fractions per step, so `0.005` means +0.5 % per period.
/// Fields without an entry are left at their naive rate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdjustmentFactors {
    rates: BTreeMap<String, f64>,
}

impl AdjustmentFactors {
    /// Creates an empty adjustment set (pure extrapolation).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an adjustment set with a single field rate.
    pub fn new_with_rate(field: &str, rate: f64) -> Self {
        Self::new().with_rate(field, rate)
    }

    /// Adds or replaces one field rate, consuming and returning the set.
    pub fn with_rate(mut self, field: &str, rate: f64) -> Self {
        self.rates.insert(field.to_string(), rate);
        self
    }

    /// Gets the adjustment for a field, defaulting to zero.
    pub fn rate_for(&self, field: &str) -> f64 {
        self.rates.get(field).copied().unwrap_or(0.0)
    }

    /// Whether no field carries an adjustment.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// Computes the per-field growth rates between the last two points of the
/// series, already including the scenario adjustments.
///
/// A rate that comes out non-finite (previous value zero) or cannot be
/// computed (field missing on the previous point) is treated as zero, so a
/// flat projection is produced instead of a poisoned one.
fn adjusted_growth_rates(
    last: &SeriesPoint,
    previous: &SeriesPoint,
    adjustments: &AdjustmentFactors,
) -> BTreeMap<String, f64> {
    let mut rates = BTreeMap::new();

    for (field, last_value) in last.values() {
        let naive = match previous.value(field) {
            Some(previous_value) => {
                let rate = (last_value - previous_value) / previous_value;
                if rate.is_finite() {
                    rate
                } else {
                    warn!(%field, previous_value, "growth rate not finite, using 0");
                    0.0
                }
            }
            None => {
                warn!(%field, "field missing on previous point, using 0 growth");
                0.0
            }
        };

        rates.insert(field.clone(), naive + adjustments.rate_for(field));
    }

    rates
}

/// Projects the series `horizon` steps into the future.
///
/// For every numeric field of the last observed point:
/// - the naive growth rate is taken from the final two points,
/// - the matching adjustment factor is added on top,
/// - step `i` projects `last * (1 + rate)^i`, rounded to one decimal.
///
/// Each projected point advances the year by the step index and keeps the
/// quarter label of the last observed period. All projected points are
/// flagged as forecast data.
///
/// A horizon of zero or a series with fewer than two points yields an empty
/// projection rather than an error.
#[instrument(skip(series, adjustments), fields(points = series.len()))]
pub fn compute_forecast(
    series: &Series,
    horizon: u32,
    adjustments: &AdjustmentFactors,
) -> Vec<SeriesPoint> {
    let points = series.points();
    let (previous, last) = match points {
        [.., previous, last] => (previous, last),
        _ => {
            debug!("series too short to extrapolate, returning empty forecast");
            return Vec::new();
        }
    };
    if horizon == 0 {
        debug!("zero horizon, returning empty forecast");
        return Vec::new();
    }

    let rates = adjusted_growth_rates(last, previous, adjustments);
    debug!(?rates, horizon, "adjusted growth rates");

    let mut forecast = Vec::with_capacity(horizon as usize);
    for step in 1..=horizon {
        let mut values = BTreeMap::new();
        for (field, rate) in &rates {
            // Rates are keyed by the last point's fields, so the lookup
            // cannot miss; default to the field being flat if it ever does.
            let base = last.value(field).unwrap_or(0.0);
            let projected = base * (1.0 + rate).powi(step as i32);
            values.insert(field.clone(), round_to_one_decimal(projected));
        }
        trace!(step, ?values, "projected step");
        forecast.push(SeriesPoint::forecast(last.period().plus_years(step), values));
    }

    forecast
}

/// Convenience wrapper for a projection without scenario adjustments.
pub fn unadjusted_forecast(series: &Series, horizon: u32) -> Vec<SeriesPoint> {
    compute_forecast(series, horizon, &AdjustmentFactors::new())
}

/// Appends projected points to a series, revalidating the period order of
/// the combined run.
pub fn append_forecast(series: &Series, forecast: Vec<SeriesPoint>) -> Result<Series> {
    let mut combined = series.points().to_vec();
    combined.extend(forecast);
    Ok(Series::new(combined)?)
}

fn round_to_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{annual_series, assert_f64_eq};
    use model::Period;

    #[test]
    fn test_forecast_length_and_flags() {
        let series = annual_series(2020, "value", &[100.0, 110.0, 121.0]);
        let forecast = unadjusted_forecast(&series, 4);

        assert_eq!(forecast.len(), 4);
        assert!(forecast.iter().all(|point| point.is_forecast()));
        for (index, point) in forecast.iter().enumerate() {
            assert_eq!(point.period(), Period::year(2023 + index as i32));
        }
    }

    #[test]
    fn test_forecast_compounds_from_last_observed_value() {
        // Last two points give a 10% rate; every step is 121 * 1.1^i.
        let series = annual_series(2020, "value", &[100.0, 110.0, 121.0]);
        let forecast = unadjusted_forecast(&series, 3);

        let expected = [133.1, 146.4, 161.1];
        for (point, expected) in forecast.iter().zip(expected) {
            assert_f64_eq(point.value("value").unwrap(), expected, 1e-9);
        }
    }

    #[test]
    fn test_population_example() {
        // 2850 / 500857 growth applied once to 503707, rounded to one decimal.
        let series = annual_series(2022, "population", &[500857.0, 503707.0]);
        let forecast = unadjusted_forecast(&series, 1);

        assert_eq!(forecast.len(), 1);
        assert_eq!(forecast[0].period(), Period::year(2024));
        let projected = forecast[0].value("population").unwrap();
        let expected = (503707.0 * (1.0 + 2850.0 / 500857.0) * 10.0_f64).round() / 10.0;
        assert_f64_eq(projected, expected, 1e-9);
        assert_f64_eq(projected, 506573.2, 1e-9);
    }

    #[test]
    fn test_adjustment_shifts_growth_rate() {
        // Flat series, +0.5% adjustment: pure scenario growth.
        let series = annual_series(2022, "population", &[1000.0, 1000.0]);
        let adjustments = AdjustmentFactors::new_with_rate("population", 0.005);
        let forecast = compute_forecast(&series, 2, &adjustments);

        assert_f64_eq(forecast[0].value("population").unwrap(), 1005.0, 1e-9);
        assert_f64_eq(forecast[1].value("population").unwrap(), 1010.0, 1e-9);
    }

    #[test]
    fn test_adjustment_only_touches_named_fields() {
        let series = Series::new(vec![
            SeriesPoint::new(Period::year(2022), BTreeMap::new())
                .with_value("rent", 10.0)
                .with_value("price", 2000.0),
            SeriesPoint::new(Period::year(2023), BTreeMap::new())
                .with_value("rent", 11.0)
                .with_value("price", 2000.0),
        ])
        .unwrap();
        let adjustments = AdjustmentFactors::new_with_rate("price", 0.1);
        let forecast = compute_forecast(&series, 1, &adjustments);

        assert_f64_eq(forecast[0].value("rent").unwrap(), 12.1, 1e-9);
        assert_f64_eq(forecast[0].value("price").unwrap(), 2200.0, 1e-9);
    }

    #[test]
    fn test_zero_previous_value_projects_flat() {
        let series = annual_series(2022, "value", &[0.0, 50.0]);
        let forecast = unadjusted_forecast(&series, 2);

        assert_f64_eq(forecast[0].value("value").unwrap(), 50.0, 1e-9);
        assert_f64_eq(forecast[1].value("value").unwrap(), 50.0, 1e-9);
    }

    #[test]
    fn test_field_missing_on_previous_point_projects_flat() {
        let series = Series::new(vec![
            SeriesPoint::new(Period::year(2022), BTreeMap::new()).with_value("rent", 9.0),
            SeriesPoint::new(Period::year(2023), BTreeMap::new())
                .with_value("rent", 9.5)
                .with_value("price", 2820.0),
        ])
        .unwrap();
        let forecast = unadjusted_forecast(&series, 1);

        assert_f64_eq(forecast[0].value("price").unwrap(), 2820.0, 1e-9);
    }

    #[test]
    fn test_empty_cases() {
        let series = annual_series(2020, "value", &[100.0, 110.0]);
        assert!(unadjusted_forecast(&series, 0).is_empty());

        let single = annual_series(2023, "value", &[100.0]);
        assert!(unadjusted_forecast(&single, 5).is_empty());

        let empty = Series::new(Vec::new()).unwrap();
        assert!(unadjusted_forecast(&empty, 5).is_empty());
    }

    #[test]
    fn test_forecast_is_deterministic() {
        let series = annual_series(2020, "value", &[100.0, 103.0, 109.0]);
        let adjustments = AdjustmentFactors::new_with_rate("value", 0.01);

        let first = compute_forecast(&series, 5, &adjustments);
        let second = compute_forecast(&series, 5, &adjustments);
        assert_eq!(first, second);
    }

    #[test]
    fn test_quarterly_series_repeats_quarter_label() {
        use model::Quarter;

        let series = Series::new(vec![
            SeriesPoint::new(Period::quarterly(2024, Quarter::Q1), BTreeMap::new())
                .with_value("rent", 9.4),
            SeriesPoint::new(Period::quarterly(2024, Quarter::Q2), BTreeMap::new())
                .with_value("rent", 9.5),
        ])
        .unwrap();
        let forecast = unadjusted_forecast(&series, 2);

        assert_eq!(forecast[0].period(), Period::quarterly(2025, Quarter::Q2));
        assert_eq!(forecast[1].period(), Period::quarterly(2026, Quarter::Q2));
    }

    #[test]
    fn test_append_forecast_keeps_order_valid() {
        let series = annual_series(2020, "value", &[100.0, 110.0]);
        let forecast = unadjusted_forecast(&series, 3);
        let combined = append_forecast(&series, forecast).unwrap();

        assert_eq!(combined.len(), 5);
        assert_eq!(combined.observed().count(), 2);
    }

    #[test]
    fn test_round_to_one_decimal() {
        assert_f64_eq(round_to_one_decimal(506573.21), 506573.2, 1e-9);
        assert_f64_eq(round_to_one_decimal(9.55), 9.6, 1e-9);
        assert_f64_eq(round_to_one_decimal(9.0), 9.0, 1e-9);
    }
}
