//! Common transport-layer types shared between the engine and its consumers.
//! These structs mirror the dashboard's payload shapes, so a frontend can
//! deserialize reports without duplicating the engine's internal types.

mod params;
mod reporting;

pub use params::ScenarioParams;
pub use reporting::{
    BenchmarkPosition, ChartPoint, CityIndicator, CompetitivenessOutlook, FieldForecast,
    ForecastSummary, GdpTrend, GrowthPotential, HousingOutlook, ScenarioInsights,
    ScenarioOutlook, TrendDirection,
};
