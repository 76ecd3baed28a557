use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::ModelError;
use crate::period::Period;

/// A single observation: one period plus the named numeric fields measured
/// in it.
///
/// Serializes flat, matching the dashboard's record shape, e.g.
/// `{"year": 2024, "quarter": "Q2", "apartment_rent": 9.5, "is_forecast": false}`.
/// Unknown numeric keys deserialize into the value map, so historical records
/// without an `is_forecast` key parse as observed data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    #[serde(flatten)]
    period: Period,
    #[serde(flatten)]
    values: BTreeMap<String, f64>,
    #[serde(default)]
    is_forecast: bool,
}

impl SeriesPoint {
    /// Creates an observed data point.
    pub fn new(period: Period, values: BTreeMap<String, f64>) -> Self {
        Self {
            period,
            values,
            is_forecast: false,
        }
    }

    /// Creates a synthesized projection point.
    pub fn forecast(period: Period, values: BTreeMap<String, f64>) -> Self {
        Self {
            period,
            values,
            is_forecast: true,
        }
    }

    /// Adds or replaces one field value, consuming and returning the point.
    pub fn with_value(mut self, field: &str, value: f64) -> Self {
        self.values.insert(field.to_string(), value);
        self
    }

    /// Gets the period of the point.
    pub fn period(&self) -> Period {
        self.period
    }

    /// Gets one field value, if the point carries that field.
    pub fn value(&self, field: &str) -> Option<f64> {
        self.values.get(field).copied()
    }

    /// Gets all field values of the point.
    pub fn values(&self) -> &BTreeMap<String, f64> {
        &self.values
    }

    /// Whether the point was synthesized by a forecast rather than observed.
    pub fn is_forecast(&self) -> bool {
        self.is_forecast
    }
}

/// An ordered run of points for one indicator family.
///
/// Construction validates that periods are strictly ascending with no
/// duplicates. A series shorter than two points is valid; it simply carries
/// no trend to extrapolate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Series {
    points: Vec<SeriesPoint>,
}

impl Series {
    /// Creates a series after checking the period order.
    pub fn new(points: Vec<SeriesPoint>) -> Result<Self, ModelError> {
        for pair in points.windows(2) {
            let (earlier, later) = (pair[0].period(), pair[1].period());
            if earlier == later {
                return Err(ModelError::DuplicatePeriod(later));
            }
            if earlier > later {
                return Err(ModelError::UnorderedPeriods(earlier, later));
            }
        }
        trace!(points = points.len(), "constructed series");
        Ok(Self { points })
    }

    /// Gets the points in period order.
    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    /// Number of points in the series.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no points at all.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Gets the earliest point.
    pub fn first(&self) -> Option<&SeriesPoint> {
        self.points.first()
    }

    /// Gets the latest point.
    pub fn last(&self) -> Option<&SeriesPoint> {
        self.points.last()
    }

    /// Iterates over the observed points only, skipping forecast points.
    pub fn observed(&self) -> impl Iterator<Item = &SeriesPoint> {
        self.points.iter().filter(|point| !point.is_forecast())
    }

    /// Collects one field as a plain vector, skipping points that lack it.
    pub fn field_values(&self, field: &str) -> Vec<f64> {
        self.points
            .iter()
            .filter_map(|point| point.value(field))
            .collect()
    }

    /// Consumes the series, returning the underlying points.
    pub fn into_points(self) -> Vec<SeriesPoint> {
        self.points
    }
}
